pub mod config;
pub mod error;
pub mod models;
pub mod hackernews;
pub mod llm;
pub mod analysis;
pub mod output;

pub use config::{Config, PipelineConfig, ProviderKind};
pub use error::{Error, Result};
pub use hackernews::{ArticleSource, HackerNewsClient};
pub use llm::{ClaudeProvider, GeminiProvider, LLMProvider};
pub use analysis::TrendPipeline;
pub use output::OutputFormat;
