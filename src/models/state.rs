use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Article;

/// Position of a run in the fixed stage sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Start,
    Fetched,
    Filtered,
    Analyzed,
    Summarized,
}

impl Stage {
    /// The stage that has to be complete before this one may be entered.
    pub fn predecessor(self) -> Option<Stage> {
        match self {
            Stage::Start => None,
            Stage::Fetched => Some(Stage::Start),
            Stage::Filtered => Some(Stage::Fetched),
            Stage::Analyzed => Some(Stage::Filtered),
            Stage::Summarized => Some(Stage::Analyzed),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Fetched => "fetched",
            Stage::Filtered => "filtered",
            Stage::Analyzed => "analyzed",
            Stage::Summarized => "summarized",
        };
        f.write_str(name)
    }
}

/// Everything a run produces. Each transition consumes the previous state and
/// fills in exactly one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    pub topic: String,
    pub raw_articles: Vec<Article>,
    pub filtered_articles: Vec<Article>,
    pub analysis: String,
    pub summary: String,
    pub stage: Stage,
}

impl PipelineState {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            raw_articles: Vec::new(),
            filtered_articles: Vec::new(),
            analysis: String::new(),
            summary: String::new(),
            stage: Stage::Start,
        }
    }

    pub fn with_raw_articles(self, articles: Vec<Article>) -> Result<Self> {
        let mut next = self.advance(Stage::Fetched)?;
        next.raw_articles = articles;
        Ok(next)
    }

    pub fn with_filtered_articles(self, articles: Vec<Article>) -> Result<Self> {
        let mut next = self.advance(Stage::Filtered)?;
        next.filtered_articles = articles;
        Ok(next)
    }

    pub fn with_analysis(self, analysis: String) -> Result<Self> {
        let mut next = self.advance(Stage::Analyzed)?;
        next.analysis = analysis;
        Ok(next)
    }

    pub fn with_summary(self, summary: String) -> Result<Self> {
        let mut next = self.advance(Stage::Summarized)?;
        next.summary = summary;
        Ok(next)
    }

    fn advance(mut self, to: Stage) -> Result<Self> {
        if to.predecessor() != Some(self.stage) {
            return Err(Error::StageOrder {
                current: self.stage,
                attempted: to,
            });
        }
        self.stage = to;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article::new(title, "https://example.com").unwrap()
    }

    #[test]
    fn test_full_transition_chain() {
        let state = PipelineState::new("AI")
            .with_raw_articles(vec![article("AI news")])
            .unwrap()
            .with_filtered_articles(vec![article("AI news")])
            .unwrap()
            .with_analysis("trends".to_string())
            .unwrap()
            .with_summary("short".to_string())
            .unwrap();

        assert_eq!(state.stage, Stage::Summarized);
        assert_eq!(state.topic, "AI");
        assert_eq!(state.raw_articles.len(), 1);
        assert_eq!(state.analysis, "trends");
        assert_eq!(state.summary, "short");
    }

    #[test]
    fn test_analysis_before_filter_is_rejected() {
        let state = PipelineState::new("AI")
            .with_raw_articles(Vec::new())
            .unwrap();

        let err = state.with_analysis("too early".to_string()).unwrap_err();
        assert!(matches!(
            err,
            Error::StageOrder {
                current: Stage::Fetched,
                attempted: Stage::Analyzed
            }
        ));
    }

    #[test]
    fn test_stage_cannot_repeat() {
        let state = PipelineState::new("AI")
            .with_raw_articles(Vec::new())
            .unwrap();

        assert!(state.with_raw_articles(Vec::new()).is_err());
    }

    #[test]
    fn test_summary_requires_analysis() {
        let err = PipelineState::new("AI")
            .with_summary("nope".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::StageOrder { current: Stage::Start, .. }));
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = PipelineState::new("rust");
        assert_eq!(state.stage, Stage::Start);
        assert!(state.raw_articles.is_empty());
        assert!(state.filtered_articles.is_empty());
        assert!(state.analysis.is_empty());
        assert!(state.summary.is_empty());
    }
}
