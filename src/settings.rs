//! Configuration for a fitting run.

use crate::error::{FitError, Result};

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;

/// Default inlier threshold, applied to the squared vertical residual.
pub const DEFAULT_RESIDUAL_THRESHOLD: f64 = 0.01;

/// Default bound on resampling attempts for the second sample point.
pub const DEFAULT_SAMPLE_RETRIES: usize = 100;

/// Settings for one fitting run.
///
/// The trial budget is fixed: exactly `iterations` trials are attempted,
/// split across `workers` threads. There is no confidence-based early
/// termination.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSettings {
    /// Total number of RANSAC trials.
    pub iterations: usize,
    /// Number of worker threads the trial budget is partitioned across.
    pub workers: usize,
    /// Inlier threshold on the squared vertical residual (strict `<`).
    pub residual_threshold: f64,
    /// Maximum redraws of the second sample point before a trial is skipped.
    pub sample_retries: usize,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            iterations: 1000,
            workers: DEFAULT_WORKERS,
            residual_threshold: DEFAULT_RESIDUAL_THRESHOLD,
            sample_retries: DEFAULT_SAMPLE_RETRIES,
        }
    }
}

impl FitSettings {
    /// Settings with the given trial budget and defaults for everything else.
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Reject invalid configurations before any worker launches.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(FitError::InvalidIterations);
        }
        if self.workers == 0 {
            return Err(FitError::InvalidWorkers);
        }
        if self.sample_retries == 0 {
            return Err(FitError::InvalidSampleRetries);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = FitSettings::default();
        assert_eq!(settings.workers, 4);
        assert!((settings.residual_threshold - 0.01).abs() < 1e-12);
        assert_eq!(settings.sample_retries, 100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_iterations_rejected() {
        let settings = FitSettings::with_iterations(0);
        assert!(matches!(
            settings.validate(),
            Err(FitError::InvalidIterations)
        ));
    }

    #[test]
    fn zero_workers_rejected() {
        let settings = FitSettings {
            workers: 0,
            ..FitSettings::default()
        };
        assert!(matches!(settings.validate(), Err(FitError::InvalidWorkers)));
    }
}
