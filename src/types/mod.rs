//! Wire types for the chat-completions request.

pub mod message;

pub use message::*;
