//! Feature sources for the model-backed prediction path.
//!
//! Predictors are fed synthetic feature vectors drawn from fixed bounded
//! integer ranges. The draw is abstracted behind [`FeatureSource`] so tests
//! can replay a fixed sequence.

use rand::Rng;

use super::{FeatureVector, FEATURE_COUNT};

/// Exclusive upper bound of each feature; every lower bound is 0.
pub const FEATURE_BOUNDS: FeatureVector = [2, 5, 6, 2, 2];

/// Supplies feature vectors to the improvement predictor.
pub trait FeatureSource {
    /// Returns the next feature vector.
    fn next_features(&mut self) -> FeatureVector;
}

/// Draws each feature uniformly from `0..FEATURE_BOUNDS[i]`.
#[derive(Debug, Clone)]
pub struct RandomFeatures<R> {
    rng: R,
}

impl<R: Rng> RandomFeatures<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FeatureSource for RandomFeatures<R> {
    fn next_features(&mut self) -> FeatureVector {
        let mut features = [0; FEATURE_COUNT];
        for (value, &bound) in features.iter_mut().zip(FEATURE_BOUNDS.iter()) {
            *value = self.rng.random_range(0..bound);
        }
        features
    }
}

/// Replays a fixed sequence of feature vectors, cycling when exhausted.
///
/// An empty sequence yields all-zero vectors.
#[derive(Debug, Clone, Default)]
pub struct FixedFeatures {
    vectors: Vec<FeatureVector>,
    cursor: usize,
}

impl FixedFeatures {
    /// Creates a source over the given vectors.
    pub fn new(vectors: Vec<FeatureVector>) -> Self {
        Self { vectors, cursor: 0 }
    }

    /// Creates a source that always returns `vector`.
    pub fn repeat(vector: FeatureVector) -> Self {
        Self::new(vec![vector])
    }
}

impl FeatureSource for FixedFeatures {
    fn next_features(&mut self) -> FeatureVector {
        if self.vectors.is_empty() {
            return [0; FEATURE_COUNT];
        }
        let features = self.vectors[self.cursor % self.vectors.len()];
        self.cursor += 1;
        features
    }
}
