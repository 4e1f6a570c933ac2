use std::sync::Arc;

use crate::error::Result;
use crate::llm::{CompletionRequest, LLMProvider, SummaryPrompt};

pub struct AnalysisSummarizer {
    llm: Arc<dyn LLMProvider>,
    temperature: f32,
}

impl AnalysisSummarizer {
    pub fn new(llm: Arc<dyn LLMProvider>, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    /// Always calls the model, including when `analysis` is the no-articles sentinel.
    pub async fn summarize(&self, analysis: &str) -> Result<String> {
        let prompt = SummaryPrompt::new(analysis).to_prompt();
        tracing::debug!("Summary prompt ({} chars)", prompt.len());

        self.llm
            .complete(CompletionRequest::new(prompt, self.temperature))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::RecordingProvider;
    use crate::llm::NO_RELEVANT_ARTICLES;

    #[tokio::test]
    async fn test_summarizes_sentinel_text() {
        let llm = Arc::new(RecordingProvider::replying(&["Nothing to report."]));
        let summarizer = AnalysisSummarizer::new(llm.clone(), 0.3);

        let summary = summarizer.summarize(NO_RELEVANT_ARTICLES).await.unwrap();

        assert_eq!(summary, "Nothing to report.");
        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.ends_with("\n\nNo relevant articles found."));
    }
}
