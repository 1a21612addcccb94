use crate::Result;
use reqwest::Client;
use serde_json::Value;

/// Sends one JSON request and returns the decoded JSON reply.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `Authorization: Bearer <bearer>`.
    async fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value> {
        (**self).post_json(url, bearer, body).await
    }
}

/// `reqwest`-backed transport with the client's default timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value> {
        tracing::debug!(%url, "sending chat-completion request");

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {bearer}"))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // Error documents are still JSON and get reported like any other reply.
        if !status.is_success() {
            tracing::warn!(%status, "chat-completion endpoint returned an error status");
        } else {
            tracing::debug!(%status, bytes = text.len(), "response received");
        }

        Ok(serde_json::from_str(&text)?)
    }
}
