//! Keyed registry of score predictors.
//!
//! Built once at startup (see [`PredictorRegistry::load`]) and shared
//! read-only afterwards. Subjects are matched to predictors by
//! [`PredictorRegistry::lookup`], the single place where matching rules live.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{LinearModel, ScorePredictor};
use crate::config::ModelStoreConfig;
use crate::error::PlanError;

/// How a subject name is matched against registry keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Key appears anywhere in the subject name, ignoring case.
    ///
    /// "Applied Math" matches "Math", and so does "Mathletics".
    #[default]
    Substring,
    /// Key equals the subject name, ignoring case.
    Exact,
}

impl MatchMode {
    /// Whether `key` matches `subject` under this mode.
    pub fn matches(&self, key: &str, subject: &str) -> bool {
        let key = key.to_lowercase();
        let subject = subject.to_lowercase();
        match self {
            MatchMode::Substring => subject.contains(&key),
            MatchMode::Exact => subject == key,
        }
    }
}

#[derive(Clone)]
struct RegisteredPredictor {
    key: String,
    predictor: Arc<dyn ScorePredictor>,
}

/// An ordered, immutable set of predictors keyed by subject.
///
/// Keys are tried in registration order; the first match wins.
#[derive(Clone, Default)]
pub struct PredictorRegistry {
    entries: Vec<RegisteredPredictor>,
    match_mode: MatchMode,
}

impl PredictorRegistry {
    /// Creates an empty registry (every subject uses the fallback estimate).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a predictor under `key`.
    pub fn with_predictor<P: ScorePredictor + 'static>(
        self,
        key: impl Into<String>,
        predictor: P,
    ) -> Self {
        self.with_shared_predictor(key, Arc::new(predictor))
    }

    /// Registers an already shared predictor under `key`.
    pub fn with_shared_predictor(
        mut self,
        key: impl Into<String>,
        predictor: Arc<dyn ScorePredictor>,
    ) -> Self {
        self.entries.push(RegisteredPredictor {
            key: key.into(),
            predictor,
        });
        self
    }

    /// Sets the subject matching mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Loads every configured model artifact.
    ///
    /// Missing artifacts are skipped: subjects for that key fall back to the
    /// rule-based estimate.
    ///
    /// # Errors
    /// [`PlanError::Store`] when an artifact cannot be opened for any reason
    /// other than not existing, or cannot be decoded.
    pub fn load(config: &ModelStoreConfig) -> Result<Self, PlanError> {
        let mut registry = Self::new().with_match_mode(config.match_mode);

        for entry in &config.models {
            let Some(model) = LinearModel::load_if_present(&entry.path)? else {
                tracing::debug!(
                    key = %entry.key,
                    path = %entry.path.display(),
                    "predictor artifact not found, skipping"
                );
                continue;
            };
            tracing::info!(
                key = %entry.key,
                path = %entry.path.display(),
                "loaded predictor"
            );
            registry = registry.with_predictor(entry.key.clone(), model);
        }

        Ok(registry)
    }

    /// Finds the predictor for a subject.
    ///
    /// Returns the matching key and its predictor.
    pub fn lookup(&self, subject: &str) -> Option<(&str, &dyn ScorePredictor)> {
        self.entries
            .iter()
            .find(|e| self.match_mode.matches(&e.key, subject))
            .map(|e| (e.key.as_str(), e.predictor.as_ref()))
    }

    /// Registered keys in lookup order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// Current matching mode.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Number of registered predictors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no predictors are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for PredictorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictorRegistry")
            .field(
                "predictors",
                &self
                    .entries
                    .iter()
                    .map(|e| format!("{}({})", e.key, e.predictor.name()))
                    .collect::<Vec<_>>(),
            )
            .field("match_mode", &self.match_mode)
            .finish()
    }
}
