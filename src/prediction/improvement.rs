//! Per-subject score improvement estimation.
//!
//! # Paths
//!
//! - **Model**: a registered predictor matches the subject. A feature vector
//!   is drawn, the raw prediction is clamped to 0..=100, and
//!   `improvement = raw / 100 * factor * (hours / total_hours) * 20`.
//! - **Fallback**: no predictor matches. `improvement = factor * 1.5`.
//!
//! In both paths `factor = max(1, 10 - difficulty)` and the predicted score
//! is `min(100, current + improvement)`, rounded to one decimal.

use super::{FeatureSource, PredictorRegistry};
use crate::error::PlanError;
use crate::models::SubjectInput;
use crate::round1;

const MODEL_SCALE: f64 = 20.0;
const FALLBACK_STEP: f64 = 1.5;

/// Predicted outcome for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted score (current..=100), rounded to one decimal.
    pub score: f64,
    /// Key of the predictor used, `None` for the fallback path.
    pub predictor: Option<String>,
}

/// `max(1, 10 - difficulty)`.
pub fn difficulty_factor(difficulty: u8) -> f64 {
    f64::from((10 - i32::from(difficulty)).max(1))
}

/// Estimates future scores using registered predictors where available.
#[derive(Debug, Clone, Copy)]
pub struct ImprovementPredictor<'a> {
    registry: &'a PredictorRegistry,
}

impl<'a> ImprovementPredictor<'a> {
    /// Creates a predictor over a registry.
    pub fn new(registry: &'a PredictorRegistry) -> Self {
        Self { registry }
    }

    /// Predicts the score for one subject.
    ///
    /// `features` is only consumed on the model path.
    ///
    /// # Errors
    /// [`PlanError::Predictor`] when the matched predictor fails or returns
    /// a non-finite value.
    pub fn predict<F: FeatureSource + ?Sized>(
        &self,
        subject: &SubjectInput,
        allocated_hours: f64,
        total_hours: u32,
        features: &mut F,
    ) -> Result<Prediction, PlanError> {
        let Some((key, predictor)) = self.registry.lookup(&subject.name) else {
            let score = Self::fallback_score(subject);
            tracing::debug!(subject = %subject.name, score, "fallback prediction");
            return Ok(Prediction {
                score,
                predictor: None,
            });
        };

        let sample = features.next_features();
        let raw = predictor
            .predict(&sample)
            .map_err(|e| PlanError::Predictor {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        if !raw.is_finite() {
            return Err(PlanError::Predictor {
                key: key.to_string(),
                message: format!("non-finite prediction {raw}"),
            });
        }

        let score = Self::model_score(subject, raw, allocated_hours, total_hours);
        tracing::debug!(
            subject = %subject.name,
            predictor = key,
            ?sample,
            raw,
            score,
            "model prediction"
        );
        Ok(Prediction {
            score,
            predictor: Some(key.to_string()),
        })
    }

    /// Rule-based estimate used when no predictor matches.
    pub fn fallback_score(subject: &SubjectInput) -> f64 {
        let current = f64::from(subject.current_score);
        let improvement = difficulty_factor(subject.difficulty) * FALLBACK_STEP;
        round1((current + improvement).min(100.0))
    }

    /// Model-based estimate from a raw predicted score.
    pub fn model_score(
        subject: &SubjectInput,
        raw_prediction: f64,
        allocated_hours: f64,
        total_hours: u32,
    ) -> f64 {
        let current = f64::from(subject.current_score);
        let raw = raw_prediction.clamp(0.0, 100.0);
        let share = if total_hours == 0 {
            0.0
        } else {
            (allocated_hours / f64::from(total_hours)).max(0.0)
        };
        let improvement =
            (raw / 100.0) * difficulty_factor(subject.difficulty) * share * MODEL_SCALE;
        round1((current + improvement).min(100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::{
        FeatureVector, FixedFeatures, LinearModel, PredictorFailure, RandomFeatures,
        ScorePredictor,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[derive(Debug)]
    struct Constant(f64);

    impl ScorePredictor for Constant {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictorFailure> {
            Ok(self.0)
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl ScorePredictor for Broken {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictorFailure> {
            Err(PredictorFailure("model unavailable".into()))
        }
    }

    #[test]
    fn test_difficulty_factor() {
        assert!((difficulty_factor(1) - 9.0).abs() < 1e-10);
        assert!((difficulty_factor(5) - 5.0).abs() < 1e-10);
        assert!((difficulty_factor(9) - 1.0).abs() < 1e-10);
        assert!((difficulty_factor(10) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fallback_exact() {
        let subject = SubjectInput::new("History", 10, 60);
        assert!((ImprovementPredictor::fallback_score(&subject) - 61.5).abs() < 1e-10);

        let subject = SubjectInput::new("Art", 2, 70);
        // 70 + 8 * 1.5
        assert!((ImprovementPredictor::fallback_score(&subject) - 82.0).abs() < 1e-10);
    }

    #[test]
    fn test_fallback_capped_at_100() {
        let subject = SubjectInput::new("Art", 1, 95);
        assert!((ImprovementPredictor::fallback_score(&subject) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_model_score_formula() {
        let subject = SubjectInput::new("Math", 5, 50);
        // 80/100 * 5 * (4/10) * 20 = 32
        let score = ImprovementPredictor::model_score(&subject, 80.0, 4.0, 10);
        assert!((score - 82.0).abs() < 1e-10);
    }

    #[test]
    fn test_model_score_clamps_raw_prediction() {
        let subject = SubjectInput::new("Math", 9, 40);
        let low = ImprovementPredictor::model_score(&subject, -35.0, 5.0, 10);
        assert!((low - 40.0).abs() < 1e-10);

        let high = ImprovementPredictor::model_score(&subject, 250.0, 10.0, 10);
        // 1.0 * 1 * 1.0 * 20 = 20
        assert!((high - 60.0).abs() < 1e-10);

        let subject = SubjectInput::new("Math", 1, 90);
        let capped = ImprovementPredictor::model_score(&subject, 100.0, 10.0, 10);
        assert!((capped - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_predict_uses_matching_model() {
        let registry = PredictorRegistry::new().with_predictor("Math", Constant(50.0));
        let predictor = ImprovementPredictor::new(&registry);
        let subject = SubjectInput::new("Math", 6, 70);

        let prediction = predictor
            .predict(&subject, 5.0, 10, &mut FixedFeatures::default())
            .unwrap();
        // 0.5 * 4 * 0.5 * 20 = 20
        assert!((prediction.score - 90.0).abs() < 1e-10);
        assert_eq!(prediction.predictor.as_deref(), Some("Math"));
    }

    #[test]
    fn test_predict_falls_back_without_match() {
        let registry = PredictorRegistry::new().with_predictor("Math", Constant(50.0));
        let predictor = ImprovementPredictor::new(&registry);
        let subject = SubjectInput::new("History", 10, 60);

        let prediction = predictor
            .predict(&subject, 5.0, 10, &mut FixedFeatures::default())
            .unwrap();
        assert!((prediction.score - 61.5).abs() < 1e-10);
        assert!(prediction.predictor.is_none());
    }

    #[test]
    fn test_predict_with_fixed_features_is_deterministic() {
        let model = LinearModel::new(vec![10.0, 5.0, 2.0, 8.0, -4.0], 40.0);
        let registry = PredictorRegistry::new().with_predictor("Reading", model);
        let predictor = ImprovementPredictor::new(&registry);
        let subject = SubjectInput::new("Reading", 4, 65);

        // raw = 40 + 10 + 15 + 10 + 0 - 4 = 71
        let mut features = FixedFeatures::repeat([1, 3, 5, 0, 1]);
        let prediction = predictor.predict(&subject, 3.0, 12, &mut features).unwrap();
        // 0.71 * 6 * 0.25 * 20 = 21.3
        assert!((prediction.score - 86.3).abs() < 1e-10);
    }

    #[test]
    fn test_random_model_path_stays_in_bounds() {
        let model = LinearModel::new(vec![3.0, -2.0, 4.0, 7.5, -6.0], 66.0);
        let registry = PredictorRegistry::new().with_predictor("Writing", model);
        let predictor = ImprovementPredictor::new(&registry);
        let mut features = RandomFeatures::new(SmallRng::seed_from_u64(2024));

        for difficulty in 1..=10u8 {
            for score in [0u8, 35, 72, 99, 100] {
                let subject = SubjectInput::new("Writing", difficulty, score);
                let prediction = predictor.predict(&subject, 4.2, 9, &mut features).unwrap();
                assert!(prediction.score >= f64::from(score));
                assert!(prediction.score <= 100.0);
            }
        }
    }

    #[test]
    fn test_predictor_failure_is_unexpected_error() {
        let registry = PredictorRegistry::new().with_predictor("Math", Broken);
        let predictor = ImprovementPredictor::new(&registry);
        let subject = SubjectInput::new("Math", 5, 50);

        let err = predictor
            .predict(&subject, 5.0, 10, &mut FixedFeatures::default())
            .unwrap_err();
        assert!(matches!(err, PlanError::Predictor { ref key, .. } if key == "Math"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_non_finite_prediction_rejected() {
        let registry = PredictorRegistry::new().with_predictor("Math", Constant(f64::NAN));
        let predictor = ImprovementPredictor::new(&registry);
        let subject = SubjectInput::new("Math", 5, 50);

        let err = predictor
            .predict(&subject, 5.0, 10, &mut FixedFeatures::default())
            .unwrap_err();
        assert!(matches!(err, PlanError::Predictor { .. }));
    }
}
