use serde::Serialize;

/// Role of a message participant. Requests only ever carry the user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A message with role and content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    /// OpenRouter message transforms, e.g. `middle-out`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<String>,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Single-turn request carrying one user message.
    pub fn user(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        ChatRequest {
            model: model.into(),
            transforms: Vec::new(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }

    pub fn with_transforms(mut self, transforms: Vec<String>) -> Self {
        self.transforms = transforms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_request_shape() {
        let body = serde_json::to_value(ChatRequest::user("m", "hello\nworld")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "m",
                "messages": [{"role": "user", "content": "hello\nworld"}]
            })
        );
    }

    #[test]
    fn test_transforms_included_when_set() {
        let request =
            ChatRequest::user("m", "p").with_transforms(vec!["middle-out".to_string()]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["transforms"], json!(["middle-out"]));
        assert_eq!(body["messages"][0]["role"], "user");
    }
}
