pub mod analyzer;
pub mod filter;
pub mod pipeline;
pub mod summarizer;

pub use analyzer::TrendAnalyzer;
pub use filter::filter_articles;
pub use pipeline::TrendPipeline;
pub use summarizer::AnalysisSummarizer;
