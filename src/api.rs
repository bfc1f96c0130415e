//! High-level entry point for robust line fitting.

use crate::core;
use crate::error::Result;
use crate::models::LineModel;
use crate::report::{FitSummary, ProgressSink};
use crate::settings::FitSettings;
use crate::types::Observation;

/// Result of a completed fitting run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    /// The global best model.
    pub model: LineModel,
    /// Inlier count of the global best model.
    pub inlier_count: usize,
    /// Derived inlier/outlier ratios.
    pub summary: FitSummary,
}

/// Fit a line to the observations with a fixed RANSAC trial budget.
///
/// The observation store is shared read-only with every worker; `sink`
/// receives a progress record for each local-best improvement. Fails before
/// launching any worker if the settings are invalid or fewer than two
/// observations were supplied.
///
/// # Example
///
/// ```rust
/// use linefit::{fit_line, FitSettings, NoopSink, Observation};
///
/// let observations = vec![
///     Observation::new(0.0, 1.0),
///     Observation::new(1.0, 3.0),
///     Observation::new(2.0, 5.0),
/// ];
/// let settings = FitSettings {
///     workers: 1,
///     ..FitSettings::with_iterations(100)
/// };
///
/// let report = fit_line(&observations, &settings, &NoopSink).unwrap();
/// assert_eq!(report.inlier_count, 3);
/// ```
pub fn fit_line(
    observations: &[Observation],
    settings: &FitSettings,
    sink: &dyn ProgressSink,
) -> Result<FitReport> {
    let best = core::run_trials(observations, settings, sink)?;
    Ok(FitReport {
        model: best.model,
        inlier_count: best.inliers,
        summary: FitSummary::from_counts(best.inliers, observations.len()),
    })
}
