//! Error types for the line fitter.

use thiserror::Error;

/// Errors produced by configuration validation, dataset loading, and the
/// fitting run itself.
///
/// Configuration errors are detected before any worker launches; no partial
/// output is produced for them.
#[derive(Error, Debug)]
pub enum FitError {
    #[error("iteration count must be at least 1")]
    InvalidIterations,

    #[error("worker count must be at least 1")]
    InvalidWorkers,

    #[error("sample retry budget must be at least 1")]
    InvalidSampleRetries,

    #[error("at least 2 observations are required, got {n}")]
    TooFewObservations { n: usize },

    #[error("degenerate dataset: no pair of observations with distinct x-coordinates")]
    DegenerateDataset,

    #[error("worker thread panicked")]
    WorkerFailed,

    #[error("failed to read observations: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, FitError>;
