//! Page primitives as handed over by the document decoder, plus the two
//! normalizers every analyzer keys its tallies on.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel used when a glyph carries no usable font name.
pub const UNKNOWN_FONT: &str = "Unknown";

/// Embedded subset fonts are named like `ABCDEF+Calibri`.
static SUBSET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{6}\+").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Primitives
// ────────────────────────────────────────────────────────────────────────────

/// A single rendered character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    #[serde(default)]
    pub font_name: String,
    #[serde(default)]
    pub size: f64,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: u32,
}

/// A decoded word token with its horizontal extent and top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub left_x: f64,
    pub right_x: f64,
    pub top_y: f64,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

fn first_page() -> u32 {
    1
}

impl Glyph {
    pub fn new(font_name: impl Into<String>, size: f64, page: u32) -> Self {
        Self {
            font_name: font_name.into(),
            size,
            page,
        }
    }
}

impl Word {
    pub fn new(left_x: f64, right_x: f64, top_y: f64, page: u32) -> Self {
        Self {
            left_x,
            right_x,
            top_y,
            page,
        }
    }

    /// Horizontal midpoint of the bounding box.
    pub fn mid_x(&self) -> f64 {
        (self.left_x + self.right_x) / 2.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalizers
// ────────────────────────────────────────────────────────────────────────────

/// Canonical font name: trimmed, then the subset prefix removed.
///
/// Only a blank raw name becomes `"Unknown"`. The prefix is stripped after that check,
/// so a prefix-only name such as `ABCDEF+` yields an empty name of its own.
pub fn normalize_font_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN_FONT.to_string();
    }
    SUBSET_PREFIX.replace(trimmed, "").into_owned()
}

/// Histogram key for a font size, one decimal place.
pub fn size_bucket(size: f64) -> String {
    format!("{size:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_prefix_is_stripped() {
        assert_eq!(normalize_font_name("ABCDEE+Calibri"), "Calibri");
        assert_eq!(normalize_font_name("  QWERTY+Helvetica-Bold "), "Helvetica-Bold");
    }

    #[test]
    fn test_plain_names_pass_through_trimmed() {
        assert_eq!(normalize_font_name(" Times-Roman\t"), "Times-Roman");
    }

    #[test]
    fn test_prefix_must_be_six_uppercase_letters() {
        assert_eq!(normalize_font_name("ABCDE+Calibri"), "ABCDE+Calibri");
        assert_eq!(normalize_font_name("abcdef+Calibri"), "abcdef+Calibri");
        assert_eq!(normalize_font_name("ABCDEFG+Calibri"), "ABCDEFG+Calibri");
    }

    #[test]
    fn test_empty_names_map_to_unknown() {
        assert_eq!(normalize_font_name(""), UNKNOWN_FONT);
        assert_eq!(normalize_font_name("   "), UNKNOWN_FONT);
    }

    #[test]
    fn test_prefix_only_name_is_empty() {
        assert_eq!(normalize_font_name("ABCDEF+"), "");
        assert_eq!(normalize_font_name("  ABCDEF+ "), "");
        // whitespace after the prefix survives; only the raw name is trimmed
        assert_eq!(normalize_font_name("ABCDEF+ Arial"), " Arial");
    }

    #[test]
    fn test_size_bucket_one_decimal() {
        assert_eq!(size_bucket(11.0), "11.0");
        assert_eq!(size_bucket(10.96), "11.0");
        assert_eq!(size_bucket(9.04), "9.0");
        assert_eq!(size_bucket(0.0), "0.0");
    }

    #[test]
    fn test_word_midpoint() {
        assert_eq!(Word::new(100.0, 200.0, 0.0, 1).mid_x(), 150.0);
    }

    #[test]
    fn test_glyph_page_defaults_to_first() {
        let glyph: Glyph = serde_json::from_str(r#"{"fontName":"Arial","size":10.0}"#).unwrap();
        assert_eq!(glyph.page, 1);
    }
}
