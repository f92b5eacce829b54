use std::str::FromStr;

use anyhow::{Context, Result};
use layout_score::AnalyzerConfig;

/// Service configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Analyzer thresholds; unset variables keep the library defaults.
    pub analyzer: AnalyzerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = AnalyzerConfig::default();
        let analyzer = AnalyzerConfig {
            left_align_tolerance: optional_env("LEFT_ALIGN_TOLERANCE")?
                .unwrap_or(defaults.left_align_tolerance),
            center_tolerance: optional_env("CENTER_TOLERANCE")?
                .unwrap_or(defaults.center_tolerance),
            fallback_page_width: optional_env("FALLBACK_PAGE_WIDTH")?
                .unwrap_or(defaults.fallback_page_width),
            histogram_limit: optional_env("HISTOGRAM_LIMIT")?
                .unwrap_or(defaults.histogram_limit),
            ..defaults
        };

        Ok(Config {
            port: optional_env("PORT")?.unwrap_or(8080),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analyzer,
        })
    }
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_missing_is_none() {
        let value: Option<u16> = optional_env("LAYOUT_API_TEST_SURELY_UNSET").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_optional_env_parses_and_rejects() {
        std::env::set_var("LAYOUT_API_TEST_TOLERANCE", " 14.5 ");
        let value: Option<f64> = optional_env("LAYOUT_API_TEST_TOLERANCE").unwrap();
        assert_eq!(value, Some(14.5));

        std::env::set_var("LAYOUT_API_TEST_BAD_PORT", "eighty");
        let err = optional_env::<u16>("LAYOUT_API_TEST_BAD_PORT").unwrap_err();
        assert!(err.to_string().contains("LAYOUT_API_TEST_BAD_PORT"));
    }
}
