//! Formatting-consistency scoring for decoded resume pages.
//!
//! Turns glyphs, words and page sizes into 0–100 scores for font consistency, alignment and
//! line spacing, plus their weighted formatting blend. A separate composite scorer folds the
//! formatting score together with content, experience and interview inputs.
//!
//! Every analyzer is a pure function of its inputs; documents can be scored concurrently
//! without coordination.

pub mod aggregate;
pub mod alignment;
pub mod composite;
pub mod config;
pub mod document;
pub mod font;
pub mod geometry;
pub mod spacing;
pub mod stats;

pub use aggregate::{formatting_score, ScoreBlock};
pub use composite::{weighted_score, CompositeInputs, ScoreWeights};
pub use config::AnalyzerConfig;
pub use document::{analyze_document, DocumentLayout, LayoutAnalysis, LayoutError};
pub use geometry::{normalize_font_name, size_bucket, Glyph, PageDimensions, Word};
