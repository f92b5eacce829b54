use serde::{Deserialize, Serialize};

/// Thresholds shared by the analyzers.
///
/// Defaults reproduce the tuned production values; tests and callers may swap in
/// alternates without touching module-level state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Max distance from the median left edge for a word to count as left-aligned.
    pub left_align_tolerance: f64,
    /// Max distance from the page's horizontal center for a word to count as centered.
    pub center_tolerance: f64,
    /// Page width used when a word's page is unknown and no page width exists at all.
    pub fallback_page_width: f64,
    /// Smallest vertical gap treated as a line break (smaller is same-line jitter).
    pub min_line_gap: f64,
    /// Largest vertical gap treated as a line break (larger is a section or page break).
    pub max_line_gap: f64,
    /// Max entries reported per usage histogram.
    pub histogram_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            left_align_tolerance: 12.0,
            center_tolerance: 20.0,
            fallback_page_width: 600.0,
            min_line_gap: 2.0,
            max_line_gap: 48.0,
            histogram_limit: 8,
        }
    }
}

impl AnalyzerConfig {
    pub fn is_line_gap(&self, gap: f64) -> bool {
        (self.min_line_gap..=self.max_line_gap).contains(&gap)
    }
}
