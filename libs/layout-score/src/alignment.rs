//! Alignment consistency: a strong shared left margin, with a small bonus for centered
//! content such as name and section headers.

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::geometry::{PageDimensions, Word};
use crate::stats::{clamp_score, fraction, median, population_std_dev, round_to};

/// Cap on the dispersion penalty so pathological inputs cannot dominate before clamping.
const MAX_DISPERSION_PENALTY: f64 = 35.0;
const DISPERSION_DIVISOR: f64 = 2.2;
const CENTERED_BONUS: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentSignal {
    /// Population standard deviation of word left edges, 2 dp.
    pub left_variance: f64,
    /// Share of words whose left edge sits near the median left edge, 3 dp.
    pub left_aligned_ratio: f64,
    /// Share of words centered on their page, 3 dp.
    pub centered_ratio: f64,
}

impl AlignmentSignal {
    fn empty() -> Self {
        Self {
            left_variance: 0.0,
            left_aligned_ratio: 0.0,
            centered_ratio: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentReport {
    pub score: u32,
    pub signal: AlignmentSignal,
}

/// Scores left-margin discipline across every word of a document.
///
/// `pages` is indexed by each word's 1-based page number.
pub fn analyze_alignment(
    words: &[Word],
    pages: &[PageDimensions],
    config: &AnalyzerConfig,
) -> AlignmentReport {
    if words.is_empty() {
        return AlignmentReport {
            score: 0,
            signal: AlignmentSignal::empty(),
        };
    }

    let left_edges: Vec<f64> = words.iter().map(|w| w.left_x).collect();
    let median_left = median(&left_edges);
    let left_variance = population_std_dev(&left_edges);
    let left_aligned = left_edges
        .iter()
        .filter(|&&x| (x - median_left).abs() <= config.left_align_tolerance)
        .count();
    let left_aligned_ratio = fraction(left_aligned, words.len());

    let centered = words
        .iter()
        .filter(|w| {
            let half_width = page_width(pages, w.page, config) / 2.0;
            (w.mid_x() - half_width).abs() <= config.center_tolerance
        })
        .count();
    let centered_ratio = fraction(centered, words.len());

    let dispersion_penalty = (left_variance / DISPERSION_DIVISOR).min(MAX_DISPERSION_PENALTY);
    let score = clamp_score(
        left_aligned_ratio * 100.0 - dispersion_penalty + centered_ratio * CENTERED_BONUS,
    );

    AlignmentReport {
        score,
        signal: AlignmentSignal {
            left_variance: round_to(left_variance, 2),
            left_aligned_ratio: round_to(left_aligned_ratio, 3),
            centered_ratio: round_to(centered_ratio, 3),
        },
    }
}

/// Width of the word's page, else the first page, else the configured fallback.
fn page_width(pages: &[PageDimensions], page: u32, config: &AnalyzerConfig) -> f64 {
    (page as usize)
        .checked_sub(1)
        .and_then(|idx| pages.get(idx))
        .or_else(|| pages.first())
        .map(|p| p.width)
        .unwrap_or(config.fallback_page_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> Vec<PageDimensions> {
        vec![PageDimensions {
            width: 612.0,
            height: 792.0,
        }]
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let report = analyze_alignment(&[], &letter(), &AnalyzerConfig::default());
        assert_eq!(report.score, 0);
        assert_eq!(report.signal, AlignmentSignal::empty());
    }

    #[test]
    fn test_shared_left_edge_is_perfect() {
        let words: Vec<Word> = (0..20)
            .map(|i| Word::new(72.0, 140.0, 72.0 + i as f64 * 14.0, 1))
            .collect();
        let report = analyze_alignment(&words, &letter(), &AnalyzerConfig::default());
        assert_eq!(report.score, 100);
        assert_eq!(report.signal.left_variance, 0.0);
        assert_eq!(report.signal.left_aligned_ratio, 1.0);
        assert_eq!(report.signal.centered_ratio, 0.0);
    }

    #[test]
    fn test_centered_words_are_detected() {
        // midpoint 306 on a 612-wide page
        let words = vec![
            Word::new(256.0, 356.0, 40.0, 1),
            Word::new(72.0, 120.0, 80.0, 1),
            Word::new(72.0, 130.0, 94.0, 1),
            Word::new(72.0, 110.0, 108.0, 1),
        ];
        let report = analyze_alignment(&words, &letter(), &AnalyzerConfig::default());
        assert_eq!(report.signal.centered_ratio, 0.25);
        assert_eq!(report.signal.left_aligned_ratio, 0.75);
        // std dev of [256, 72, 72, 72] = 79.674…; 75 - 35 + 2 = 42
        assert_eq!(report.signal.left_variance, 79.67);
        assert_eq!(report.score, 42);
    }

    #[test]
    fn test_tolerance_edges_are_inclusive() {
        let words = vec![
            Word::new(100.0, 110.0, 0.0, 1),
            Word::new(100.0, 110.0, 0.0, 1),
            Word::new(112.0, 120.0, 0.0, 1),
        ];
        let report = analyze_alignment(&words, &letter(), &AnalyzerConfig::default());
        assert_eq!(report.signal.left_aligned_ratio, 1.0);
    }

    #[test]
    fn test_dispersion_penalty_is_capped() {
        let words: Vec<Word> = (0..50)
            .map(|i| Word::new(if i % 2 == 0 { 0.0 } else { 500.0 }, 10.0, 0.0, 1))
            .collect();
        let report = analyze_alignment(&words, &letter(), &AnalyzerConfig::default());
        assert!(report.score <= 100);
        // median 250 matches nothing; penalty capped at 35 → clamped to 0
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_page_width_lookup_and_fallbacks() {
        let config = AnalyzerConfig::default();
        let pages = vec![
            PageDimensions {
                width: 612.0,
                height: 792.0,
            },
            PageDimensions {
                width: 842.0,
                height: 595.0,
            },
        ];
        assert_eq!(page_width(&pages, 2, &config), 842.0);
        assert_eq!(page_width(&pages, 7, &config), 612.0);
        assert_eq!(page_width(&pages, 0, &config), 612.0);
        assert_eq!(page_width(&[], 1, &config), 600.0);
    }

    #[test]
    fn test_custom_tolerance_changes_result() {
        let words = vec![
            Word::new(100.0, 110.0, 0.0, 1),
            Word::new(100.0, 110.0, 0.0, 1),
            Word::new(118.0, 130.0, 0.0, 1),
        ];
        let strict = analyze_alignment(&words, &letter(), &AnalyzerConfig::default());
        let loose = analyze_alignment(
            &words,
            &letter(),
            &AnalyzerConfig {
                left_align_tolerance: 20.0,
                ..AnalyzerConfig::default()
            },
        );
        assert!(loose.score > strict.score);
    }
}
