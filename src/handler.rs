//! Request boundary.
//!
//! Accepts the plan form as submitted by a client, runs the planner, and
//! produces a response that a display layer can render directly. Input
//! errors are reported verbatim; anything else is logged and replaced by a
//! generic message.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::{PlanTable, StudyPlan};
use crate::planner::StudyPlanner;
use crate::prediction::FeatureSource;
use crate::validation::parse_request;

/// Message shown for failures that are not caused by caller input.
pub const GENERIC_ERROR: &str = "Something went wrong. Try again.";

/// Plan form fields, all in text form.
///
/// `subjects`, `difficulty` and `scores` are comma-separated lists. The
/// three focus fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanForm {
    pub subjects: String,
    pub difficulty: String,
    pub scores: String,
    pub hours: String,
    pub morning: Option<String>,
    pub afternoon: Option<String>,
    pub night: Option<String>,
}

impl PlanForm {
    /// Creates a form without focus ratings.
    pub fn new(
        subjects: impl Into<String>,
        difficulty: impl Into<String>,
        scores: impl Into<String>,
        hours: impl Into<String>,
    ) -> Self {
        Self {
            subjects: subjects.into(),
            difficulty: difficulty.into(),
            scores: scores.into(),
            hours: hours.into(),
            ..Self::default()
        }
    }

    /// Sets the Morning, Afternoon and Night focus ratings.
    pub fn with_focus(
        mut self,
        morning: impl Into<String>,
        afternoon: impl Into<String>,
        night: impl Into<String>,
    ) -> Self {
        self.morning = Some(morning.into());
        self.afternoon = Some(afternoon.into());
        self.night = Some(night.into());
        self
    }

    fn focus_fields(&self) -> [Option<&str>; 3] {
        [
            self.morning.as_deref(),
            self.afternoon.as_deref(),
            self.night.as_deref(),
        ]
    }
}

/// Result of handling one plan form.
///
/// Either `table` is set and `error` is `None`, or the reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub table: Option<PlanTable>,
    pub suggestions: Vec<String>,
    pub error: Option<String>,
}

impl PlanResponse {
    fn success(plan: StudyPlan) -> Self {
        Self {
            table: Some(plan.table()),
            suggestions: plan.suggestions,
            error: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            table: None,
            suggestions: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Whether a plan was produced.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Validates a form and generates a plan.
///
/// Errors propagate unchanged; see [`handle_plan_request`] for the
/// caller-facing variant.
pub fn generate_plan<F: FeatureSource + ?Sized>(
    planner: &StudyPlanner,
    form: &PlanForm,
    features: &mut F,
) -> Result<StudyPlan, PlanError> {
    let request = parse_request(
        &form.subjects,
        &form.difficulty,
        &form.scores,
        &form.hours,
        &form.focus_fields(),
    )?;
    planner.plan(&request, features)
}

/// Handles a plan form end to end.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_study::handler::{handle_plan_request, PlanForm};
/// use u_study::planner::StudyPlanner;
/// use u_study::prediction::{FixedFeatures, PredictorRegistry};
///
/// let planner = StudyPlanner::new(Arc::new(PredictorRegistry::new()));
///
/// let form = PlanForm::new("Math,Reading", "5", "80,70", "10");
/// let response = handle_plan_request(&planner, &form, &mut FixedFeatures::default());
/// assert!(!response.is_success());
/// assert!(response.error.unwrap().contains("Mismatched"));
/// ```
pub fn handle_plan_request<F: FeatureSource + ?Sized>(
    planner: &StudyPlanner,
    form: &PlanForm,
    features: &mut F,
) -> PlanResponse {
    match generate_plan(planner, form, features) {
        Ok(plan) => PlanResponse::success(plan),
        Err(err) if err.is_user_error() => {
            tracing::warn!(error = %err, "rejected plan request");
            PlanResponse::failure(err.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "plan generation failed");
            PlanResponse::failure(GENERIC_ERROR)
        }
    }
}
