use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::analyzer::TrendAnalyzer;
use crate::analysis::filter::filter_articles;
use crate::analysis::summarizer::AnalysisSummarizer;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::hackernews::ArticleSource;
use crate::llm::LLMProvider;
use crate::models::PipelineState;

/// Runs fetch, filter, analyze and summarize strictly in that order.
pub struct TrendPipeline {
    source: Box<dyn ArticleSource>,
    analyzer: TrendAnalyzer,
    summarizer: AnalysisSummarizer,
    config: PipelineConfig,
}

impl TrendPipeline {
    pub fn new(
        source: impl ArticleSource + 'static,
        llm: Arc<dyn LLMProvider>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source: Box::new(source),
            analyzer: TrendAnalyzer::new(llm.clone(), config.temperature),
            summarizer: AnalysisSummarizer::new(llm, config.temperature),
            config,
        }
    }

    pub async fn run(&self, topic: &str) -> Result<PipelineState> {
        let pb = self.progress_bar();
        let state = PipelineState::new(topic);

        // Step 1: Fetch
        pb.set_message(format!("Fetching stories from {}...", self.source.name()));
        let raw = self.source.fetch_articles().await?;
        tracing::info!("Fetched {} articles from {}", raw.len(), self.source.name());
        let state = state.with_raw_articles(raw)?;

        // Step 2: Filter
        let filtered = filter_articles(&state.raw_articles, &state.topic);
        tracing::info!(
            "{} of {} articles match \"{}\"",
            filtered.len(),
            state.raw_articles.len(),
            state.topic
        );
        let state = state.with_filtered_articles(filtered)?;

        // Step 3: Analyze
        pb.set_message(format!(
            "Analyzing {} matching stories...",
            state.filtered_articles.len()
        ));
        let analysis = self
            .analyzer
            .analyze(&state.topic, &state.filtered_articles)
            .await?;
        tracing::info!("Analysis complete ({} chars)", analysis.len());
        let state = state.with_analysis(analysis)?;

        // Step 4: Summarize
        pb.set_message("Summarizing analysis...");
        let summary = self.summarizer.summarize(&state.analysis).await?;
        tracing::info!("Summary complete ({} chars)", summary.len());
        let state = state.with_summary(summary)?;

        pb.finish_and_clear();
        Ok(state)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::error::Error;
    use crate::llm::testing::RecordingProvider;
    use crate::models::{Article, Stage};

    struct StaticSource {
        titles: Vec<&'static str>,
    }

    #[async_trait]
    impl ArticleSource for StaticSource {
        async fn fetch_articles(&self) -> Result<Vec<Article>> {
            Ok(self
                .titles
                .iter()
                .enumerate()
                .filter_map(|(i, t)| Article::new(t, format!("item?id={}", i)))
                .collect())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ArticleSource for FailingSource {
        async fn fetch_articles(&self) -> Result<Vec<Article>> {
            Err(Error::Fetch {
                url: "https://news.ycombinator.com/".to_string(),
                status: 502,
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            temperature: 0.3,
            show_progress: false,
        }
    }

    #[tokio::test]
    async fn test_ai_topic_end_to_end() {
        let llm = Arc::new(RecordingProvider::replying(&["analysis text", "summary text"]));
        let source = StaticSource {
            titles: vec!["New AI model released", "A cooking recipe", "AI ethics debate"],
        };
        let pipeline = TrendPipeline::new(source, llm.clone(), config());

        let state = pipeline.run("AI").await.unwrap();

        assert_eq!(state.stage, Stage::Summarized);
        assert_eq!(state.raw_articles.len(), 3);
        let titles: Vec<_> = state.filtered_articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["New AI model released", "AI ethics debate"]);
        assert_eq!(state.analysis, "analysis text");
        assert_eq!(state.summary, "summary text");

        let requests = llm.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].prompt.contains("- New AI model released"));
        assert!(!requests[0].prompt.contains("cooking"));
        assert!(requests[1].prompt.ends_with("\n\nanalysis text"));
    }

    #[tokio::test]
    async fn test_no_match_summarizes_sentinel() {
        let llm = Arc::new(RecordingProvider::replying(&["nothing relevant today"]));
        let source = StaticSource {
            titles: vec!["New AI model released"],
        };
        let pipeline = TrendPipeline::new(source, llm.clone(), config());

        let state = pipeline.run("Quantum").await.unwrap();

        assert!(state.filtered_articles.is_empty());
        assert_eq!(state.analysis, "No relevant articles found.");
        assert_eq!(state.summary, "nothing relevant today");

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.ends_with("No relevant articles found."));
    }

    #[tokio::test]
    async fn test_fetch_error_aborts_before_inference() {
        let llm = Arc::new(RecordingProvider::replying(&["unused", "unused"]));
        let pipeline = TrendPipeline::new(FailingSource, llm.clone(), config());

        let err = pipeline.run("AI").await.unwrap_err();

        assert!(matches!(err, Error::Fetch { status: 502, .. }));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_analysis_error_skips_summary() {
        let llm = Arc::new(RecordingProvider::new(vec![
            Err(Error::LLMApi("quota exceeded".to_string())),
            Ok("unused".to_string()),
        ]));
        let source = StaticSource {
            titles: vec!["AI everywhere"],
        };
        let pipeline = TrendPipeline::new(source, llm.clone(), config());

        let err = pipeline.run("ai").await.unwrap_err();

        assert!(matches!(err, Error::LLMApi(ref msg) if msg == "quota exceeded"));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_summary_error_is_fatal() {
        let llm = Arc::new(RecordingProvider::new(vec![
            Ok("analysis".to_string()),
            Err(Error::LLMApi("timeout".to_string())),
        ]));
        let source = StaticSource {
            titles: vec!["AI everywhere"],
        };
        let pipeline = TrendPipeline::new(source, llm, config());

        assert!(pipeline.run("AI").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_topic_matches_everything() {
        let llm = Arc::new(RecordingProvider::replying(&["a", "s"]));
        let source = StaticSource {
            titles: vec!["one", "two"],
        };
        let pipeline = TrendPipeline::new(source, llm, config());

        let state = pipeline.run("").await.unwrap();
        assert_eq!(state.filtered_articles, state.raw_articles);
    }
}
