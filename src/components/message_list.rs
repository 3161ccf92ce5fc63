use yew::prelude::*;

use crate::hooks::Message;

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<Message>,
}

/// Transient notifications, stacked above the main content area.
#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    if props.messages.is_empty() {
        return html! {};
    }

    html! {
        <div class="messages">
            {
                for props.messages.iter().map(|message| html! {
                    <div key={message.id} class={classes!("message", message.kind.css_class())}>
                        { &message.text }
                    </div>
                })
            }
        </div>
    }
}
