//! Send a single chat-completion request to OpenRouter and print the raw JSON response.
//!
//! The flow is strictly linear: configuration from the environment, prompt from a file,
//! one POST to the chat-completions endpoint, then the pretty-printed response and the
//! elapsed time. The [`transport::Transport`] trait is the seam between the client and
//! the network.

pub mod cli;
pub mod client;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod paragraphs;
pub mod prompt;
pub mod report;
pub mod runner;
pub mod samples;
pub mod transport;
pub mod types;

// Re-export core types for easy usage
pub use client::ChatClient;
pub use config::Config;
pub use error::{Error, Result};
pub use report::Reporter;
pub use transport::{HttpTransport, Transport};
pub use types::*;
