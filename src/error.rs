//! Error types for study planning.
//!
//! Planning errors fall into two groups:
//!
//! - **User errors**: malformed or out-of-range input. Their messages are
//!   meant to be shown to the caller verbatim.
//! - **Unexpected errors**: predictor or model-store failures. These are
//!   logged and replaced by a generic message at the request boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while validating input or generating a study plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Per-subject sequences have different lengths.
    #[error(
        "Mismatched input lengths: {subjects} subjects, {difficulty} difficulty ratings, {scores} scores"
    )]
    LengthMismatch {
        subjects: usize,
        difficulty: usize,
        scores: usize,
    },

    /// A numeric value lies outside its allowed range.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    Range {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Input text could not be parsed into the expected shape.
    #[error("{0}")]
    Format(String),

    /// The study-hour budget is not positive.
    #[error("Total study hours must be positive, got {0}")]
    InvalidBudget(i64),

    /// A registered predictor failed to produce a score.
    #[error("Predictor '{key}' failed: {message}")]
    Predictor { key: String, message: String },

    /// A predictor artifact could not be read or decoded.
    #[error("Failed to load predictor from {}: {message}", .path.display())]
    Store { path: PathBuf, message: String },
}

impl PlanError {
    /// Creates a range error.
    pub fn range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        PlanError::Range {
            field,
            value,
            min,
            max,
        }
    }

    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        PlanError::Format(message.into())
    }

    /// Whether this error stems from caller input and may be shown as-is.
    pub fn is_user_error(&self) -> bool {
        match self {
            PlanError::LengthMismatch { .. }
            | PlanError::Range { .. }
            | PlanError::Format(_)
            | PlanError::InvalidBudget(_) => true,
            PlanError::Predictor { .. } | PlanError::Store { .. } => false,
        }
    }
}

/// Errors raised while loading planner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
