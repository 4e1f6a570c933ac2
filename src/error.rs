use thiserror::Error;

use crate::models::Stage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("{provider} API error ({status}): {message}")]
    LLMStatus {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("{provider} request failed: {source}")]
    LLMRequest {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Stage {attempted} cannot run while pipeline is at {current}")]
    StageOrder { current: Stage, attempted: Stage },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure is transient: 5xx, 429, timeouts and refused
    /// connections. The pipeline itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(e) | Error::LLMRequest { source: e, .. } => {
                e.is_timeout() || e.is_connect()
            }
            Error::Fetch { status, .. } | Error::LLMStatus { status, .. } => {
                is_transient_status(*status)
            }
            _ => false,
        }
    }
}

fn is_transient_status(status: u16) -> bool {
    status == 429 || (500..=599).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm_status(status: u16) -> Error {
        Error::LLMStatus {
            provider: "Gemini".to_string(),
            status,
            message: "x".to_string(),
        }
    }

    #[test]
    fn test_stage_order_message() {
        let err = Error::StageOrder {
            current: Stage::Start,
            attempted: Stage::Analyzed,
        };
        assert_eq!(
            err.to_string(),
            "Stage analyzed cannot run while pipeline is at start"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_status_classification() {
        assert!(llm_status(429).is_retryable());
        assert!(llm_status(500).is_retryable());
        assert!(llm_status(503).is_retryable());
        assert!(!llm_status(400).is_retryable());
        assert!(!llm_status(401).is_retryable());
        assert!(!llm_status(404).is_retryable());
    }

    #[test]
    fn test_fetch_status_classification() {
        let unavailable = Error::Fetch {
            url: "https://news.ycombinator.com/".to_string(),
            status: 503,
        };
        let missing = Error::Fetch {
            url: "https://news.ycombinator.com/".to_string(),
            status: 404,
        };
        assert!(unavailable.is_retryable());
        assert!(!missing.is_retryable());
        assert_eq!(
            unavailable.to_string(),
            "Failed to fetch https://news.ycombinator.com/: HTTP 503"
        );
    }

    #[test]
    fn test_content_errors_are_not_retryable() {
        assert!(!Error::LLMApi("Prompt blocked by Gemini: SAFETY".to_string()).is_retryable());
        assert!(!Error::ParseError("bad selector".to_string()).is_retryable());
        assert!(!Error::Config("missing key".to_string()).is_retryable());
    }
}
