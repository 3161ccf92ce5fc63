pub mod use_messages;
pub mod use_session;

pub use use_messages::{use_messages, Message, MessageKind, UseMessagesHandle};
pub use use_session::{use_session, UseSessionHandle};
