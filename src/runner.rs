//! The end-to-end send flow: configuration, prompt, API call, report.

use crate::client::ChatClient;
use crate::report::Reporter;
use crate::transport::Transport;
use crate::{prompt, Config, Result};
use serde_json::Value;
use std::io::Write;
use std::time::Instant;

/// Run the send flow with variables taken from `lookup`.
///
/// Configuration and prompt errors are raised before `transport` is touched.
pub async fn run<F, T, W>(lookup: F, transport: T, out: W) -> Result<Value>
where
    F: Fn(&str) -> Option<String>,
    T: Transport,
    W: Write,
{
    let config = Config::from_lookup(lookup)?;
    send(&config, transport, out).await
}

/// Load the prompt named by `config`, send it and report the response to `out`.
pub async fn send<T, W>(config: &Config, transport: T, out: W) -> Result<Value>
where
    T: Transport,
    W: Write,
{
    let prompt = prompt::load(&config.prompt_file)?;
    let client = ChatClient::new(transport, config);

    let start = Instant::now();
    let response = client.complete(&prompt).await?;
    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "response received");

    Reporter::new(out).report(&response, start)?;
    Ok(response)
}
