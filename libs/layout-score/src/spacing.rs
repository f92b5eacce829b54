//! Line-spacing consistency.
//!
//! Baseline is 92 rather than 100: perfectly regular spacing is rare even in clean
//! documents. Irregularity and poor density are penalized independently, each capped.

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::geometry::Word;
use crate::stats::{clamp_score, median, population_std_dev, round_to};

const BASELINE: f64 = 92.0;
const MAX_CONSISTENCY_PENALTY: f64 = 40.0;
const CONSISTENCY_FACTOR: f64 = 3.2;
/// Median gaps inside this band are neither cramped nor loose.
const COMFORTABLE_GAP: (f64, f64) = (7.0, 18.0);
const CRAMPED_FACTOR: f64 = 5.0;
const LOOSE_FACTOR: f64 = 2.0;
const MAX_LOOSE_PENALTY: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingSignal {
    /// 2 dp.
    pub median_gap: f64,
    /// Population standard deviation of line gaps, 2 dp.
    pub gap_variance: f64,
    pub line_count: usize,
}

impl SpacingSignal {
    fn empty() -> Self {
        Self {
            median_gap: 0.0,
            gap_variance: 0.0,
            line_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpacingReport {
    pub score: u32,
    pub signal: SpacingSignal,
}

/// Successive differences of the sorted word tops, keeping only plausible line breaks.
pub fn line_gaps(words: &[Word], config: &AnalyzerConfig) -> Vec<f64> {
    let mut tops: Vec<f64> = words.iter().map(|w| w.top_y).collect();
    tops.sort_by(|a, b| a.total_cmp(b));
    tops.windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|&gap| config.is_line_gap(gap))
        .collect()
}

pub fn analyze_spacing(words: &[Word], config: &AnalyzerConfig) -> SpacingReport {
    score_gaps(&line_gaps(words, config))
}

/// Scores an already-filtered list of line gaps.
pub fn score_gaps(gaps: &[f64]) -> SpacingReport {
    if gaps.is_empty() {
        return SpacingReport {
            score: 0,
            signal: SpacingSignal::empty(),
        };
    }

    let median_gap = median(gaps);
    let gap_variance = population_std_dev(gaps);

    let consistency_penalty = (gap_variance * CONSISTENCY_FACTOR).min(MAX_CONSISTENCY_PENALTY);
    let score = clamp_score(BASELINE - consistency_penalty - density_penalty(median_gap));

    SpacingReport {
        score,
        signal: SpacingSignal {
            median_gap: round_to(median_gap, 2),
            gap_variance: round_to(gap_variance, 2),
            line_count: gaps.len() + 1,
        },
    }
}

fn density_penalty(median_gap: f64) -> f64 {
    let (low, high) = COMFORTABLE_GAP;
    if median_gap < low {
        (low - median_gap) * CRAMPED_FACTOR
    } else if median_gap > high {
        ((median_gap - high) * LOOSE_FACTOR).min(MAX_LOOSE_PENALTY)
    } else {
        0.0
    }
}
