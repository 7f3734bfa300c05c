//! Study plan generation.
//!
//! # Pipeline
//!
//! 1. **Allocate** the hour budget by need ([`allocate_hours`]).
//! 2. **Schedule** focus slots by need ranking ([`FocusScheduler`]).
//! 3. **Predict** each subject's score ([`ImprovementPredictor`]).
//! 4. **Suggest** advisory text ([`generate_suggestions`]).
//!
//! [`StudyPlanner`] runs the stages in order. Any stage error aborts the
//! plan; no partial plan is returned.

mod allocator;
mod focus;
mod suggestions;

pub use allocator::{allocate_hours, Allocation};
pub use focus::{FocusScheduler, DEFAULT_SECONDARY_SHARE};
pub use suggestions::{
    generate_suggestions, DEFAULT_LOW_HOURS_THRESHOLD, MORE_HOURS_TIP, MORNING_TIP, NIGHT_TIP,
    WEEKLY_SUMMARY,
};

use std::sync::Arc;

use rand::Rng;

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::models::{PlanRequest, StudyPlan, SubjectPlan};
use crate::prediction::{FeatureSource, ImprovementPredictor, PredictorRegistry, RandomFeatures};

/// Generates study plans from validated requests.
///
/// Holds the shared predictor registry; cheap to clone and safe to share
/// across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_study::planner::StudyPlanner;
/// use u_study::prediction::{FixedFeatures, PredictorRegistry};
/// use u_study::validation::parse_request;
///
/// let request = parse_request(
///     "Math,Reading,Writing",
///     "5,5,5",
///     "50,50,50",
///     "15",
///     &[Some("5"), Some("5"), Some("5")],
/// )
/// .unwrap();
///
/// let planner = StudyPlanner::new(Arc::new(PredictorRegistry::new()));
/// let plan = planner.plan(&request, &mut FixedFeatures::default()).unwrap();
///
/// assert_eq!(plan.subject_count(), 3);
/// assert!(plan.subjects.iter().all(|s| (s.allocated_hours - 5.0).abs() < 1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct StudyPlanner {
    registry: Arc<PredictorRegistry>,
    scheduler: FocusScheduler,
    low_hours_threshold: u32,
}

impl StudyPlanner {
    /// Creates a planner with default settings.
    pub fn new(registry: Arc<PredictorRegistry>) -> Self {
        Self {
            registry,
            scheduler: FocusScheduler::new(),
            low_hours_threshold: DEFAULT_LOW_HOURS_THRESHOLD,
        }
    }

    /// Creates a planner from configuration.
    pub fn from_config(registry: Arc<PredictorRegistry>, config: &PlannerConfig) -> Self {
        Self::new(registry)
            .with_scheduler(FocusScheduler::new().with_secondary_share(config.secondary_share))
            .with_low_hours_threshold(config.low_hours_threshold)
    }

    /// Sets the focus scheduler.
    pub fn with_scheduler(mut self, scheduler: FocusScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Sets the hour budget below which more study time is suggested.
    pub fn with_low_hours_threshold(mut self, hours: u32) -> Self {
        self.low_hours_threshold = hours;
        self
    }

    /// The shared predictor registry.
    pub fn registry(&self) -> &PredictorRegistry {
        &self.registry
    }

    /// Generates a plan, drawing model features from `features`.
    pub fn plan<F: FeatureSource + ?Sized>(
        &self,
        request: &PlanRequest,
        features: &mut F,
    ) -> Result<StudyPlan, PlanError> {
        tracing::debug!(
            subjects = request.subject_count(),
            total_hours = request.total_hours(),
            "generating study plan"
        );

        let allocations = allocate_hours(request.subjects(), request.total_hours())?;
        let needs: Vec<u32> = allocations.iter().map(|a| a.need).collect();
        let focus = request.focus();
        let slots = self.scheduler.assign(&focus, &needs);
        let (primary, _) = self.scheduler.rank_slots(&focus);

        let predictor = ImprovementPredictor::new(&self.registry);
        let mut rows = Vec::with_capacity(request.subject_count());
        for ((subject, allocation), best_time) in
            request.subjects().iter().zip(&allocations).zip(slots)
        {
            let prediction =
                predictor.predict(subject, allocation.hours, request.total_hours(), features)?;
            rows.push(SubjectPlan {
                subject: subject.name.clone(),
                difficulty: subject.difficulty,
                current_score: subject.current_score,
                need: allocation.need,
                weight: allocation.weight,
                allocated_hours: allocation.hours,
                best_time,
                predicted_score: prediction.score,
                predictor: prediction.predictor,
            });
        }

        let suggestions =
            generate_suggestions(&rows, request.total_hours(), primary, self.low_hours_threshold);

        Ok(StudyPlan {
            subjects: rows,
            suggestions,
        })
    }

    /// Generates a plan, drawing model features from `rng`.
    pub fn plan_with_rng<R: Rng>(
        &self,
        request: &PlanRequest,
        rng: R,
    ) -> Result<StudyPlan, PlanError> {
        self.plan(request, &mut RandomFeatures::new(rng))
    }
}
