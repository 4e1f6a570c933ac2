use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::llm::provider::{CompletionRequest, LLMProvider};

pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ClaudeMessage>,
}

#[derive(Serialize, Deserialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    error: Option<ClaudeError>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ClaudeError {
    message: String,
}

impl ClaudeProvider {
    pub fn new(api_key: String, model: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string()),
            base_url: ANTHROPIC_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl LLMProvider for ClaudeProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        tracing::debug!("Sending {} prompt chars to Claude", request.prompt.len());

        let request_body = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: 4096,
            temperature: request.temperature,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::LLMRequest {
                provider: self.name().to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LLMStatus {
                provider: self.name().to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        let result: ClaudeResponse = response
            .json()
            .await
            .map_err(|e| Error::LLMApi(format!("Failed to parse Claude response: {}", e)))?;

        if let Some(error) = result.error {
            return Err(Error::LLMApi(error.message));
        }

        let text = result
            .content
            .into_iter()
            .filter(|c| c.content_type == "text")
            .filter_map(|c| c.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(Error::LLMApi("Empty response from Claude".to_string()));
        }

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "Claude"
    }
}
