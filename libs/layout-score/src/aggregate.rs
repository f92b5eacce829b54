use serde::{Deserialize, Serialize};

use crate::stats::clamp_score;

// Fixed design weights: font consistency matters most, spacing least.
pub const FONT_WEIGHT: f64 = 0.38;
pub const ALIGNMENT_WEIGHT: f64 = 0.34;
pub const SPACING_WEIGHT: f64 = 0.28;

/// The four formatting scores of one document, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBlock {
    pub font_consistency: u32,
    pub alignment: u32,
    pub spacing: u32,
    pub formatting: u32,
}

impl ScoreBlock {
    pub fn from_components(font_consistency: u32, alignment: u32, spacing: u32) -> Self {
        Self {
            font_consistency,
            alignment,
            spacing,
            formatting: formatting_score(font_consistency, alignment, spacing),
        }
    }
}

pub fn formatting_score(font: u32, alignment: u32, spacing: u32) -> u32 {
    clamp_score(
        font as f64 * FONT_WEIGHT
            + alignment as f64 * ALIGNMENT_WEIGHT
            + spacing as f64 * SPACING_WEIGHT,
    )
}
