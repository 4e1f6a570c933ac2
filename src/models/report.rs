use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::PipelineState;

/// A finished run together with where its analysis came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    pub generated_at: DateTime<Utc>,
    pub provider: String,
    pub model: String,
    #[serde(flatten)]
    pub state: PipelineState,
}

impl TrendReport {
    pub fn new(state: PipelineState, provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            provider: provider.into(),
            model: model.into(),
            state,
        }
    }
}
