use crate::application::ports::{LlmClient, LlmClientError};

/// Returns a fixed completion so the classifier can run without a network.
pub struct MockLlmClient {
    response: String,
}

impl MockLlmClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(
            r#"{"classification": "Human-generated", "confidence": 0.5, "explanation": "Mock analysis"}"#,
        )
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system_prompt: &str, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.response.clone())
    }
}
