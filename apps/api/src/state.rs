use std::sync::Arc;

use layout_score::{AnalyzerConfig, ScoreWeights};

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: every analysis works on its own request data.
#[derive(Clone)]
pub struct AppState {
    /// Analyzer thresholds, shared with blocking workers.
    pub analyzer: Arc<AnalyzerConfig>,
    /// Weights applied when a composite request omits its own.
    pub default_weights: ScoreWeights,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            analyzer: Arc::new(config.analyzer.clone()),
            default_weights: ScoreWeights::default(),
        }
    }
}
