//! Error types for configuration and externally supplied fragments.

use thiserror::Error;

/// Errors produced while loading or validating an [`ExtractorConfig`](crate::ExtractorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse extractor config: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// `min_words` must not exceed `max_words`.
    #[error("word bounds are inverted: min_words {min} > max_words {max}")]
    InvertedBounds { min: usize, max: usize },

    #[error("`{name}` must lie within [{low}, {high}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },
}

/// Errors produced while reading a fragment payload.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The payload is not a JSON array of strings.
    #[error("fragment payload is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}
