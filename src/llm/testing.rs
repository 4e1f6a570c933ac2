use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::llm::provider::{CompletionRequest, LLMProvider};

/// Replays canned responses in order and records every request it sees.
pub struct RecordingProvider {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingProvider {
    pub fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMProvider for RecordingProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::LLMApi("no canned response left".to_string())))
    }

    fn model(&self) -> &str {
        "recording-model"
    }

    fn name(&self) -> &str {
        "Recording"
    }
}
