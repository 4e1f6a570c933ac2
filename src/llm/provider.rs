use async_trait::async_trait;
use crate::error::Result;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// A configured text-completion client. Implementations unwrap their
/// provider-specific response shape and hand back plain text.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
    fn model(&self) -> &str;
    fn name(&self) -> &str;
}
