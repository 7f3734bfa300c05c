//! Score predictors and improvement estimation.
//!
//! A [`ScorePredictor`] maps a feature vector to a predicted subject score.
//! Predictors are registered under subject keys in a [`PredictorRegistry`],
//! which is built once and shared read-only across requests.
//! [`ImprovementPredictor`] turns a predictor's output (or a rule-based
//! fallback) into a predicted score for one subject.
//!
//! # Usage
//!
//! ```
//! use u_study::prediction::{LinearModel, PredictorRegistry};
//!
//! let registry = PredictorRegistry::new()
//!     .with_predictor("Math", LinearModel::new(vec![1.0, 0.5, 0.5, 2.0, 1.5], 60.0));
//!
//! assert_eq!(registry.lookup("Applied mathematics").map(|(key, _)| key), Some("Math"));
//! assert!(registry.lookup("History").is_none());
//! ```

mod features;
mod improvement;
mod linear;
mod registry;

pub use features::{FeatureSource, FixedFeatures, RandomFeatures, FEATURE_BOUNDS};
pub use improvement::{difficulty_factor, ImprovementPredictor, Prediction};
pub use linear::LinearModel;
pub use registry::{MatchMode, PredictorRegistry};

use std::fmt::Debug;

use thiserror::Error;

/// Number of features a predictor consumes.
pub const FEATURE_COUNT: usize = 5;

/// Input vector for a score predictor.
pub type FeatureVector = [u32; FEATURE_COUNT];

/// Failure reported by a predictor.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct PredictorFailure(pub String);

/// A trained estimator that predicts a subject score from features.
///
/// Implementations must be immutable after construction; registries share
/// them across threads.
pub trait ScorePredictor: Send + Sync + Debug {
    /// Predictor name for diagnostics.
    fn name(&self) -> &str {
        "predictor"
    }

    /// Predicts a raw score, nominally within 0..=100.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorFailure>;
}
