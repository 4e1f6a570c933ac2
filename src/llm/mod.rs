pub mod provider;
pub mod claude;
pub mod gemini;
pub mod prompts;

#[cfg(test)]
pub(crate) mod testing;

pub use provider::{CompletionRequest, LLMProvider};
pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;
pub use prompts::{AnalysisPrompt, SummaryPrompt, NO_RELEVANT_ARTICLES};
