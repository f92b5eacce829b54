//! Font consistency: how much of the document is set in one face and a handful of sizes.
//!
//! Up to two font names and three size buckets are free. Every extra name costs 8 points
//! and every extra size 6 points, on top of the share of glyphs not in the dominant face.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::geometry::{normalize_font_name, size_bucket, Glyph, UNKNOWN_FONT};
use crate::stats::clamp_score;

const FREE_FONT_NAMES: usize = 2;
const FONT_NAME_PENALTY: f64 = 8.0;
const FREE_SIZE_BUCKETS: usize = 3;
const SIZE_BUCKET_PENALTY: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSignal {
    pub dominant_font: String,
    pub dominant_size: f64,
    /// Glyph counts per normalized font name, most used first.
    pub font_counts: IndexMap<String, usize>,
    /// Glyph counts per size bucket, most used first.
    pub size_counts: IndexMap<String, usize>,
}

impl FontSignal {
    fn empty() -> Self {
        Self {
            dominant_font: UNKNOWN_FONT.to_string(),
            dominant_size: 0.0,
            font_counts: IndexMap::new(),
            size_counts: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontReport {
    pub score: u32,
    pub signal: FontSignal,
}

/// Scores font usage across every glyph of a document.
///
/// An empty glyph list scores 0: a document without text is penalized, not neutral.
pub fn analyze_fonts(glyphs: &[Glyph], config: &AnalyzerConfig) -> FontReport {
    if glyphs.is_empty() {
        return FontReport {
            score: 0,
            signal: FontSignal::empty(),
        };
    }

    let mut font_counts: IndexMap<String, usize> = IndexMap::new();
    let mut size_counts: IndexMap<String, usize> = IndexMap::new();
    for glyph in glyphs {
        *font_counts
            .entry(normalize_font_name(&glyph.font_name))
            .or_default() += 1;
        *size_counts.entry(size_bucket(glyph.size)).or_default() += 1;
    }

    let (dominant_font, dominant_count) = dominant(&font_counts);
    let dominant_size = dominant(&size_counts)
        .0
        .parse::<f64>()
        .unwrap_or_default();
    let dominant_ratio = dominant_count as f64 / glyphs.len() as f64;

    let variety_penalty =
        font_counts.len().saturating_sub(FREE_FONT_NAMES) as f64 * FONT_NAME_PENALTY;
    let size_penalty =
        size_counts.len().saturating_sub(FREE_SIZE_BUCKETS) as f64 * SIZE_BUCKET_PENALTY;
    let score = clamp_score(dominant_ratio * 100.0 - variety_penalty - size_penalty);

    FontReport {
        score,
        signal: FontSignal {
            dominant_font: dominant_font.to_string(),
            dominant_size,
            font_counts: most_common(&font_counts, config.histogram_limit),
            size_counts: most_common(&size_counts, config.histogram_limit),
        },
    }
}

/// Highest-count key; on ties the key seen first wins.
fn dominant(counts: &IndexMap<String, usize>) -> (&str, usize) {
    let mut best: (&str, usize) = ("", 0);
    for (key, &count) in counts {
        if count > best.1 {
            best = (key.as_str(), count);
        }
    }
    best
}

/// Top `limit` entries by count, descending. The sort is stable so ties keep first-seen order.
fn most_common(counts: &IndexMap<String, usize>, limit: usize) -> IndexMap<String, usize> {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .into_iter()
        .take(limit)
        .map(|(key, &count)| (key.clone(), count))
        .collect()
}
