//! Study-time planning.
//!
//! Turns a learner's subjects, difficulty ratings, current scores, hour
//! budget and time-of-day focus ratings into a study plan: hours per
//! subject, recommended time slots, predicted scores, and suggestions.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PlanRequest`, `FocusProfile`, `StudyPlan`
//! - **`validation`**: Text/typed input parsing and range checks
//! - **`planner`**: Hour allocation, slot assignment, suggestions, orchestration
//! - **`prediction`**: Score predictors, predictor registry, improvement estimation
//! - **`config`**: TOML-loadable planner settings
//! - **`handler`**: Form-in, response-out request boundary
//!
//! # Lifecycle
//!
//! Build a [`prediction::PredictorRegistry`] once at startup, wrap it in an
//! `Arc`, and hand it to a [`planner::StudyPlanner`]. Planners are cheap to
//! clone; every request works on its own data.

pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod planner;
pub mod prediction;
pub mod validation;

pub use error::{ConfigError, PlanError};

/// Rounds to one decimal place (half away from zero).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
