//! Progress reporting and run summaries.

use crate::models::LineModel;

/// One progress record, emitted whenever a worker improves its local best.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRecord {
    /// 1-based global trial index.
    pub trial: usize,
    /// Inlier count of the improved model.
    pub inliers: usize,
    /// The improved model.
    pub model: LineModel,
}

/// Receiver for progress records.
///
/// Emission is advisory only: implementations must not block or fail the
/// trial that produced the record. Sinks are shared by reference across all
/// workers, hence the `Sync` bound.
pub trait ProgressSink: Sync {
    fn improved(&self, record: &ProgressRecord);
}

/// Sink that discards every record.
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn improved(&self, _record: &ProgressRecord) {}
}

/// Derived inlier/outlier ratios of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    pub inlier_ratio: f64,
    pub outlier_ratio: f64,
}

impl FitSummary {
    /// Ratios from the best inlier count and the store size.
    pub fn from_counts(inliers: usize, total: usize) -> Self {
        let inlier_ratio = inliers as f64 / total as f64;
        Self {
            inlier_ratio,
            outlier_ratio: 1.0 - inlier_ratio,
        }
    }
}
