//! Line model in slope/intercept form.

use crate::types::Observation;

/// A line `y = slope * x + intercept`.
///
/// Models are transient: one is produced per trial and discarded unless it
/// becomes a new local best.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LineModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Predicted `y` for the given `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Squared vertical residual of an observation under this model.
    pub fn residual_sq(&self, observation: &Observation) -> f64 {
        let r = observation.y - self.predict(observation.x);
        r * r
    }
}
