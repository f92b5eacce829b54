//! Axum route handlers for the scoring API.

use anyhow::Context;
use axum::{extract::State, Json};
use layout_score::{
    analyze_document, weighted_score, CompositeInputs, DocumentLayout, LayoutAnalysis,
    ScoreWeights,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Answer score assumed when the candidate has no judged interview answers.
const DEFAULT_ANSWERS_SCORE: f64 = 60.0;

fn default_answers_score() -> f64 {
    DEFAULT_ANSWERS_SCORE
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScoreRequest {
    pub ai_score: f64,
    pub experience_years: f64,
    pub format_score: f64,
    #[serde(default = "default_answers_score")]
    pub answers_score: f64,
    /// Falls back to the service default weights when omitted.
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
}

impl CompositeScoreRequest {
    fn inputs(&self) -> CompositeInputs {
        CompositeInputs {
            ai_score: self.ai_score,
            experience_years: self.experience_years,
            format_score: self.format_score,
            answers_score: self.answers_score,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScoreResponse {
    pub final_score: f64,
    pub weights: ScoreWeights,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout/analyze
///
/// Scores the decoded primitives of one document. Scoring is CPU-bound, so it runs on the
/// blocking pool.
pub async fn handle_analyze_layout(
    State(state): State<AppState>,
    Json(layout): Json<DocumentLayout>,
) -> Result<Json<LayoutAnalysis>, AppError> {
    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || analyze_document(&layout, &analyzer))
        .await
        .context("layout analysis task failed")??;

    info!(
        "Layout analyzed: {} page(s), formatting score {}",
        analysis.page_count, analysis.scores.formatting
    );
    Ok(Json(analysis))
}

/// POST /api/v1/scores/composite
///
/// Blends content, experience, formatting and answer scores into one candidate score.
pub async fn handle_composite_score(
    State(state): State<AppState>,
    Json(request): Json<CompositeScoreRequest>,
) -> Result<Json<CompositeScoreResponse>, AppError> {
    if request.experience_years < 0.0 {
        return Err(AppError::Validation(
            "experienceYears cannot be negative".to_string(),
        ));
    }

    let weights = request.weights.unwrap_or(state.default_weights);
    let final_score = weighted_score(&request.inputs(), &weights);

    Ok(Json(CompositeScoreResponse {
        final_score,
        weights,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_answers_score_defaults_to_sixty() {
        let request: CompositeScoreRequest =
            serde_json::from_str(r#"{"aiScore":92,"experienceYears":4,"formatScore":77}"#)
                .unwrap();
        assert_eq!(request.answers_score, 60.0);
        assert!(request.weights.is_none());
    }

    #[test]
    fn test_required_inputs_stay_required() {
        let parsed: Result<CompositeScoreRequest, _> =
            serde_json::from_str(r#"{"aiScore":92,"experienceYears":4}"#);
        assert!(parsed.is_err());
    }
}
