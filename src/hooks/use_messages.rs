use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// One transient notification. Messages stack in arrival order and each
/// disappears on its own timer; there is no de-duplication.
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    pub id: u32,
    pub kind: MessageKind,
    pub text: String,
}

enum MessagesAction {
    Push(Message),
    Dismiss(u32),
}

#[derive(Default)]
struct MessageStack {
    messages: Vec<Message>,
}

impl Reducible for MessageStack {
    type Action = MessagesAction;

    fn reduce(self: Rc<Self>, action: MessagesAction) -> Rc<Self> {
        match action {
            MessagesAction::Push(message) => {
                let mut messages = self.messages.clone();
                messages.push(message);
                Rc::new(Self { messages })
            }
            MessagesAction::Dismiss(id) => Rc::new(Self {
                messages: self
                    .messages
                    .iter()
                    .filter(|m| m.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct UseMessagesHandle {
    pub messages: Vec<Message>,
    pub push: Callback<(String, MessageKind)>,
}

/// Transient message stack with auto-dismiss. Dismissal goes through the
/// reducer's dispatcher so a timer firing late still sees the live list.
#[hook]
pub fn use_messages() -> UseMessagesHandle {
    let stack = use_reducer(MessageStack::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let stack = stack.clone();
        Callback::from(move |(text, kind): (String, MessageKind)| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            stack.dispatch(MessagesAction::Push(Message { id, kind, text }));

            let dispatcher = stack.dispatcher();
            Timeout::new(CONFIG.message_timeout_ms, move || {
                dispatcher.dispatch(MessagesAction::Dismiss(id));
            })
            .forget();
        })
    };

    UseMessagesHandle {
        messages: stack.messages.clone(),
        push,
    }
}
