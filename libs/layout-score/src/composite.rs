//! Composite candidate score: blends an externally judged content score, experience,
//! the formatting score and interview answers into one 0–100 value.

use serde::{Deserialize, Serialize};

use crate::stats::round_to;

/// Points awarded per year of experience, capped at 100 (ten years).
const POINTS_PER_YEAR: f64 = 10.0;
const MAX_COMPONENT: f64 = 100.0;

/// Relative weights of the four composite inputs. Only the ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub format: f64,
    pub answers: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            experience: 25.0,
            format: 15.0,
            answers: 20.0,
        }
    }
}

impl ScoreWeights {
    /// Weights scaled to sum to one. A non-positive total is floored at 1 rather than
    /// failing, so all-zero weights yield all-zero shares.
    pub fn normalized(&self) -> Self {
        let total = (self.skills + self.experience + self.format + self.answers).max(1.0);
        Self {
            skills: self.skills / total,
            experience: self.experience / total,
            format: self.format / total,
            answers: self.answers / total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeInputs {
    /// Content-quality score from the external judge, 0–100.
    pub ai_score: f64,
    pub experience_years: f64,
    /// Usually the document's formatting score.
    pub format_score: f64,
    pub answers_score: f64,
}

pub fn experience_component(years: f64) -> f64 {
    (years * POINTS_PER_YEAR).min(MAX_COMPONENT)
}

/// Weighted blend of the four inputs, clamped to `0..=100` and rounded to 2 dp.
///
/// Inputs are not validated; callers own range checks.
pub fn weighted_score(inputs: &CompositeInputs, weights: &ScoreWeights) -> f64 {
    let shares = weights.normalized();
    let score = inputs.ai_score * shares.skills
        + experience_component(inputs.experience_years) * shares.experience
        + inputs.format_score * shares.format
        + inputs.answers_score * shares.answers;
    round_to(score.clamp(0.0, MAX_COMPONENT), 2)
}
