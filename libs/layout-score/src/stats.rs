//! Small numeric helpers shared by the analyzers.
//!
//! Integer scores round half-to-even; decimal rounding is done on the exact binary
//! value, so `0.025` (stored slightly above the tie) rounds up.

/// Rounds to the nearest integer and clamps into `0..=100`.
pub fn clamp_score(value: f64) -> u32 {
    value.round_ties_even().clamp(0.0, 100.0) as u32
}

/// Rounds to `places` decimal places, correctly rounded from the exact binary value.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Median of the sample; the mean of the two middle values for even lengths.
/// Returns 0.0 for an empty sample.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divisor N). Samples with fewer than two values have none.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Share of `part` in `total`, 0.0 when `total` is zero.
pub fn fraction(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
