use std::sync::Arc;

use crate::error::Result;
use crate::llm::{AnalysisPrompt, CompletionRequest, LLMProvider, NO_RELEVANT_ARTICLES};
use crate::models::Article;

pub struct TrendAnalyzer {
    llm: Arc<dyn LLMProvider>,
    temperature: f32,
}

impl TrendAnalyzer {
    pub fn new(llm: Arc<dyn LLMProvider>, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    /// Asks the model for trends, relevance and sentiment across `articles`.
    /// Without articles no request is made and the fixed sentinel is returned.
    pub async fn analyze(&self, topic: &str, articles: &[Article]) -> Result<String> {
        if articles.is_empty() {
            tracing::info!("No articles matched \"{}\", skipping analysis request", topic);
            return Ok(NO_RELEVANT_ARTICLES.to_string());
        }

        let prompt = AnalysisPrompt::new(topic, articles).to_prompt();
        tracing::debug!(
            "Analysis prompt for {} articles ({} chars)",
            articles.len(),
            prompt.len()
        );

        self.llm
            .complete(CompletionRequest::new(prompt, self.temperature))
            .await
    }
}
