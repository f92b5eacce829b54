//! Whole-document analysis: runs the three analyzers over one document's primitives
//! and folds their results into the response shape consumers expect.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::aggregate::ScoreBlock;
use crate::alignment::{analyze_alignment, AlignmentSignal};
use crate::config::AnalyzerConfig;
use crate::font::{analyze_fonts, FontSignal};
use crate::geometry::{Glyph, PageDimensions, Word};
use crate::spacing::{analyze_spacing, SpacingSignal};

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("document has no pages")]
    NoPages,
}

/// Primitives of one decoded document. Glyph and word `page` fields index `pages` (1-based).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub pages: Vec<PageDimensions>,
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Flat summary of the signals, for dashboards and list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub dominant_font: String,
    pub dominant_font_size: f64,
    /// Entries in the reported font histogram, so at most the histogram limit.
    pub font_variety_count: usize,
    pub left_margin_variance: f64,
    pub line_gap_variance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSignals {
    pub font: FontSignal,
    pub alignment: AlignmentSignal,
    pub spacing: SpacingSignal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAnalysis {
    pub page_count: usize,
    pub scores: ScoreBlock,
    pub metrics: LayoutMetrics,
    pub signals: LayoutSignals,
}

/// Scores a single document. Pure: no state survives the call.
///
/// Only a document without pages is rejected; missing glyphs or words just score 0 in the
/// affected dimension.
pub fn analyze_document(
    layout: &DocumentLayout,
    config: &AnalyzerConfig,
) -> Result<LayoutAnalysis, LayoutError> {
    if layout.pages.is_empty() {
        return Err(LayoutError::NoPages);
    }

    let font = analyze_fonts(&layout.glyphs, config);
    let alignment = analyze_alignment(&layout.words, &layout.pages, config);
    let spacing = analyze_spacing(&layout.words, config);
    let scores = ScoreBlock::from_components(font.score, alignment.score, spacing.score);

    debug!(
        pages = layout.pages.len(),
        glyphs = layout.glyphs.len(),
        words = layout.words.len(),
        font = scores.font_consistency,
        alignment = scores.alignment,
        spacing = scores.spacing,
        formatting = scores.formatting,
        "Document layout scored"
    );

    let metrics = LayoutMetrics {
        dominant_font: font.signal.dominant_font.clone(),
        dominant_font_size: font.signal.dominant_size,
        font_variety_count: font.signal.font_counts.len(),
        left_margin_variance: alignment.signal.left_variance,
        line_gap_variance: spacing.signal.gap_variance,
    };

    Ok(LayoutAnalysis {
        page_count: layout.pages.len(),
        scores,
        metrics,
        signals: LayoutSignals {
            font: font.signal,
            alignment: alignment.signal,
            spacing: spacing.signal,
        },
    })
}
