//! Linear score estimator.
//!
//! Stores fitted regression coefficients and persists them as JSON:
//!
//! ```text
//! {"coefficients": [c0, c1, c2, c3, c4], "intercept": b}
//! score = b + sum(c_i * x_i)
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureVector, PredictorFailure, ScorePredictor, FEATURE_COUNT};
use crate::error::PlanError;

/// A fitted linear regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// One coefficient per feature.
    pub coefficients: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
}

impl LinearModel {
    /// Creates a model from coefficients and intercept.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Loads a model from a JSON artifact.
    ///
    /// # Errors
    /// [`PlanError::Store`] when the file cannot be read, is not valid JSON,
    /// or has the wrong number of coefficients.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        match Self::load_if_present(path)? {
            Some(model) => Ok(model),
            None => Err(PlanError::Store {
                path: path.to_path_buf(),
                message: "file not found".into(),
            }),
        }
    }

    /// Loads a model, returning `None` when the artifact does not exist.
    ///
    /// # Errors
    /// [`PlanError::Store`] for any other I/O failure, invalid JSON, or the
    /// wrong number of coefficients.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>, PlanError> {
        let store_err = |message: String| PlanError::Store {
            path: path.to_path_buf(),
            message,
        };

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(store_err(e.to_string())),
        };
        let model: LinearModel = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| store_err(e.to_string()))?;

        if model.coefficients.len() != FEATURE_COUNT {
            return Err(store_err(format!(
                "expected {FEATURE_COUNT} coefficients, found {}",
                model.coefficients.len()
            )));
        }
        Ok(Some(model))
    }
}

impl ScorePredictor for LinearModel {
    fn name(&self) -> &str {
        "linear"
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorFailure> {
        if self.coefficients.len() != features.len() {
            return Err(PredictorFailure(format!(
                "expected {} features, model has {} coefficients",
                features.len(),
                self.coefficients.len()
            )));
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, &x)| c * f64::from(x))
            .sum();
        Ok(self.intercept + dot)
    }
}
