//! Minimal-sample model fitting.

use crate::models::LineModel;
use crate::types::Observation;

/// Fits a line exactly through two observations with distinct x-coordinates.
///
/// The caller (the trial runner, via the sampler) guarantees distinctness;
/// equal x-coordinates would divide by zero.
#[derive(Debug, Default)]
pub struct LineFitter;

impl LineFitter {
    pub fn new() -> Self {
        Self
    }

    /// Fit the unique line through `a` and `b`.
    pub fn fit(&self, a: &Observation, b: &Observation) -> LineModel {
        debug_assert!(
            a.x != b.x,
            "minimal sample must have distinct x-coordinates"
        );
        let slope = (b.y - a.y) / (b.x - a.x);
        let intercept = a.y - slope * a.x;
        LineModel::new(slope, intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::LineFitter;
    use crate::types::Observation;

    #[test]
    fn fit_passes_through_both_points() {
        let fitter = LineFitter::new();
        let a = Observation::new(1.0, 3.0);
        let b = Observation::new(4.0, 9.0);
        let model = fitter.fit(&a, &b);

        assert!((model.predict(a.x) - a.y).abs() < 1e-12);
        assert!((model.predict(b.x) - b.y).abs() < 1e-12);
        assert!((model.slope - 2.0).abs() < 1e-12);
        assert!((model.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fit_is_deterministic() {
        let fitter = LineFitter::new();
        let a = Observation::new(-2.5, 0.25);
        let b = Observation::new(3.75, -1.5);

        let first = fitter.fit(&a, &b);
        let second = fitter.fit(&a, &b);
        assert_eq!(first, second);
    }

    #[test]
    fn near_equal_x_gives_extreme_but_finite_behavior() {
        let fitter = LineFitter::new();
        let a = Observation::new(0.0, 0.0);
        let b = Observation::new(1e-12, 1.0);
        let model = fitter.fit(&a, &b);
        // Extreme slope is allowed; it is not an error.
        assert!(model.slope.is_finite());
    }
}
