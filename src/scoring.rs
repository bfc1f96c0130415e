//! Inlier scoring for candidate models.

use crate::models::LineModel;
use crate::types::Observation;

/// Counts observations whose squared vertical residual falls strictly below
/// a fixed threshold.
///
/// Deterministic and side-effect-free; the O(N) scan here is the dominant
/// cost per trial.
#[derive(Debug, Clone, Copy)]
pub struct InlierScorer {
    threshold: f64,
}

impl InlierScorer {
    /// `threshold` applies directly to the squared residual.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Number of inliers of `model` over the full observation store.
    pub fn count(&self, observations: &[Observation], model: &LineModel) -> usize {
        observations
            .iter()
            .filter(|obs| model.residual_sq(obs) < self.threshold)
            .count()
    }
}
