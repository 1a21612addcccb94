use crate::transport::Transport;
use crate::{ChatRequest, Config, Result};
use serde_json::Value;

/// Chat-completions client bound to one configuration.
pub struct ChatClient<T> {
    transport: T,
    api_key: String,
    model: String,
    endpoint: String,
    transforms: Vec<String>,
}

impl<T: Transport> ChatClient<T> {
    /// Create a client that sends through `transport`.
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint().to_string(),
            transforms: config.transforms.clone(),
        }
    }

    /// Build the request body for `prompt`.
    pub fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::user(self.model.clone(), prompt).with_transforms(self.transforms.clone())
    }

    /// Send `prompt` as a single user message and return the response document verbatim.
    pub async fn complete(&self, prompt: &str) -> Result<Value> {
        let body = serde_json::to_value(self.build_request(prompt))?;
        tracing::info!(model = %self.model, endpoint = %self.endpoint, "calling chat-completions API");
        self.transport
            .post_json(&self.endpoint, &self.api_key, &body)
            .await
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    struct Recording {
        calls: Mutex<Vec<(String, String, Value)>>,
        reply: Value,
    }

    #[async_trait::async_trait]
    impl Transport for Recording {
        async fn post_json(&self, url: &str, bearer: &str, body: &Value) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), bearer.to_string(), body.clone()));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_complete_returns_reply_verbatim() {
        let reply = json!({"id": "gen-1", "choices": [{"message": {"content": "hi"}}], "extra": [1, 2.5, null]});
        let transport = Recording {
            calls: Mutex::new(Vec::new()),
            reply: reply.clone(),
        };
        let config = Config::new("key-1", "vendor/model", "/unused");
        let client = ChatClient::new(transport, &config);

        let value = client.complete("what?").await.unwrap();
        assert_eq!(value, reply);

        let calls = client.transport().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (url, bearer, body) = &calls[0];
        assert_eq!(url, crate::config::DEFAULT_ENDPOINT);
        assert_eq!(bearer, "key-1");
        assert_eq!(body["model"], "vendor/model");
        assert_eq!(body["messages"], json!([{"role": "user", "content": "what?"}]));
        assert!(body.get("transforms").is_none());
    }

    #[test]
    fn test_build_request_with_transforms() {
        let transport = Recording {
            calls: Mutex::new(Vec::new()),
            reply: Value::Null,
        };
        let config = Config::new("k", "m", "/unused").with_transforms(["middle-out"]);
        let client = ChatClient::new(transport, &config);

        let request = client.build_request("p");
        assert_eq!(request.transforms, vec!["middle-out"]);
        assert_eq!(request.messages.len(), 1);
    }
}
