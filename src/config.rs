//! Planner configuration.
//!
//! Loaded from TOML; every field has a default, so an empty file is valid.
//!
//! ```toml
//! secondary_share = 0.4
//! low_hours_threshold = 10
//!
//! [model_store]
//! match_mode = "substring"
//!
//! [[model_store.models]]
//! key = "Math"
//! path = "models/math_model.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::planner::{DEFAULT_LOW_HOURS_THRESHOLD, DEFAULT_SECONDARY_SHARE};
use crate::prediction::MatchMode;

/// A predictor artifact location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Subject key matched against subject names.
    pub key: String,
    /// Path to the JSON artifact.
    pub path: PathBuf,
}

impl ModelEntry {
    /// Creates an entry.
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// Where predictor artifacts live and how subjects are matched to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelStoreConfig {
    /// Artifacts in lookup order.
    pub models: Vec<ModelEntry>,
    /// Subject matching rule.
    pub match_mode: MatchMode,
}

impl Default for ModelStoreConfig {
    fn default() -> Self {
        Self {
            models: vec![
                ModelEntry::new("Math", "models/math_model.json"),
                ModelEntry::new("Reading", "models/reading_model.json"),
                ModelEntry::new("Writing", "models/writing_model.json"),
            ],
            match_mode: MatchMode::Substring,
        }
    }
}

impl ModelStoreConfig {
    /// Resolves relative artifact paths against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for entry in &mut self.models {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
        self
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Predictor store settings.
    pub model_store: ModelStoreConfig,
    /// Share of subjects (by need) that receive a secondary slot.
    pub secondary_share: f64,
    /// Hour budget below which more study time is suggested.
    pub low_hours_threshold: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            model_store: ModelStoreConfig::default(),
            secondary_share: DEFAULT_SECONDARY_SHARE,
            low_hours_threshold: DEFAULT_LOW_HOURS_THRESHOLD,
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file. Relative artifact paths resolve against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            config.model_store = config.model_store.resolve_paths(dir);
        }
        tracing::debug!(path = %path.display(), "loaded planner config");
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.secondary_share > 0.0 && self.secondary_share <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "secondary_share must be in (0, 1], got {}",
                self.secondary_share
            )));
        }
        if let Some(entry) = self.model_store.models.iter().find(|m| m.key.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "model key for {} must not be empty",
                entry.path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert!((config.secondary_share - 0.4).abs() < 1e-10);
        assert_eq!(config.low_hours_threshold, 10);
        let keys: Vec<&str> = config.model_store.models.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["Math", "Reading", "Writing"]);
        assert_eq!(config.model_store.match_mode, MatchMode::Substring);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let config = PlannerConfig::from_toml_str(
            r#"
            secondary_share = 0.5
            low_hours_threshold = 6

            [model_store]
            match_mode = "exact"

            [[model_store.models]]
            key = "Physics"
            path = "/opt/models/physics.json"
            "#,
        )
        .unwrap();

        assert!((config.secondary_share - 0.5).abs() < 1e-10);
        assert_eq!(config.low_hours_threshold, 6);
        assert_eq!(config.model_store.match_mode, MatchMode::Exact);
        assert_eq!(
            config.model_store.models,
            vec![ModelEntry::new("Physics", "/opt/models/physics.json")]
        );
    }

    #[test]
    fn test_invalid_share() {
        let err = PlannerConfig::from_toml_str("secondary_share = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = PlannerConfig::from_toml_str("secondary_share = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_syntax_error() {
        let err = PlannerConfig::from_toml_str("secondary_share = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.toml");
        std::fs::write(
            &path,
            r#"
            [[model_store.models]]
            key = "Math"
            path = "models/math_model.json"
            "#,
        )
        .unwrap();

        let config = PlannerConfig::load(&path).unwrap();
        assert_eq!(
            config.model_store.models[0].path,
            dir.path().join("models/math_model.json")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlannerConfig::load(Path::new("/nonexistent/planner.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
