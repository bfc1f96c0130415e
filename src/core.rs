//! The trial loop, workers, and the coordinating reduction.
//!
//! A fitting run partitions the trial budget into contiguous ranges, runs
//! one worker per range on its own thread, waits for all of them, and then
//! reduces the workers' local bests into the global best. The observation
//! store is the only shared state and is read-only for the whole run, so
//! the join at the end of the scope is the single synchronization point.

use std::ops::Range;
use std::thread;

use log::{debug, warn};

use crate::error::{FitError, Result};
use crate::estimators::LineFitter;
use crate::models::LineModel;
use crate::report::{ProgressRecord, ProgressSink};
use crate::samplers::DistinctXSampler;
use crate::scoring::InlierScorer;
use crate::settings::FitSettings;
use crate::types::{Observation, MSS_SIZE};

/// Best-so-far state of one worker: inlier count and the model that
/// achieved it. Starts at zero inliers with the zero line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalBest {
    pub inliers: usize,
    pub model: LineModel,
}

/// Split `total` trials into `workers` contiguous half-open ranges.
///
/// Each range has `total / workers` trials; the remainder goes entirely to
/// the last range, so trial indices are stable for a given `(total, workers)`
/// pair.
pub(crate) fn partition_trials(total: usize, workers: usize) -> Vec<Range<usize>> {
    let per_worker = total / workers;
    (0..workers)
        .map(|w| {
            let start = w * per_worker;
            let end = if w + 1 == workers {
                total
            } else {
                start + per_worker
            };
            start..end
        })
        .collect()
}

/// Executes the trial runner over one contiguous range of trial indices,
/// holding private local-best state. Workers never coordinate with each
/// other; they only read the shared observation store.
pub(crate) struct Worker<'a> {
    observations: &'a [Observation],
    trials: Range<usize>,
    sampler: DistinctXSampler,
    fitter: LineFitter,
    scorer: InlierScorer,
}

impl<'a> Worker<'a> {
    pub(crate) fn new(
        observations: &'a [Observation],
        trials: Range<usize>,
        settings: &FitSettings,
    ) -> Self {
        Self {
            observations,
            trials,
            sampler: DistinctXSampler::new(settings.sample_retries),
            fitter: LineFitter::new(),
            scorer: InlierScorer::new(settings.residual_threshold),
        }
    }

    /// Run every trial in this worker's range and return its local best.
    ///
    /// A trial whose sample budget is exhausted is skipped. A worker that
    /// could not complete a single trial of a non-empty range reports the
    /// dataset as degenerate; its siblings are unaffected. A worker whose
    /// range was empty returns `Ok(None)` so the reduction never mistakes
    /// it for a completed one.
    pub(crate) fn run(mut self, sink: &dyn ProgressSink) -> Result<Option<LocalBest>> {
        let trials = self.trials.clone();
        let assigned = trials.len();
        if assigned == 0 {
            return Ok(None);
        }

        let mut best = LocalBest::default();
        let mut completed = 0usize;

        for trial in trials {
            if self.run_trial(trial, &mut best, sink) {
                completed += 1;
            }
        }

        if completed == 0 {
            return Err(FitError::DegenerateDataset);
        }
        debug!(
            "worker finished: {completed}/{assigned} trials, best inliers {}",
            best.inliers
        );
        Ok(Some(best))
    }

    /// One RANSAC trial: sample, fit, score, and update the local best on a
    /// strict improvement. Returns `false` if the trial had to be skipped.
    fn run_trial(&mut self, trial: usize, best: &mut LocalBest, sink: &dyn ProgressSink) -> bool {
        let Some((i, j)) = self.sampler.sample(self.observations) else {
            return false;
        };

        let model = self
            .fitter
            .fit(&self.observations[i], &self.observations[j]);
        let inliers = self.scorer.count(self.observations, &model);

        if inliers > best.inliers {
            *best = LocalBest { inliers, model };
            sink.improved(&ProgressRecord {
                trial: trial + 1,
                inliers,
                model,
            });
        }
        true
    }
}

/// Validate the configuration, fan workers out over scoped threads, wait
/// for all of them, and reduce their local bests into the global best.
pub(crate) fn run_trials(
    observations: &[Observation],
    settings: &FitSettings,
    sink: &dyn ProgressSink,
) -> Result<LocalBest> {
    settings.validate()?;
    if observations.len() < MSS_SIZE {
        return Err(FitError::TooFewObservations {
            n: observations.len(),
        });
    }

    let ranges = partition_trials(settings.iterations, settings.workers);

    let results: Vec<Result<Option<LocalBest>>> = thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|trials| scope.spawn(move || Worker::new(observations, trials, settings).run(sink)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|_| Err(FitError::WorkerFailed)))
            .collect()
    });

    reduce(results)
}

/// Select the local best with the strictly greatest inlier count; on exact
/// ties the lowest-indexed worker wins.
///
/// Failed workers are logged and skipped, and workers with an empty trial
/// range do not count as completed; the run only succeeds when at least one
/// trial-bearing worker produced a result.
pub(crate) fn reduce(results: Vec<Result<Option<LocalBest>>>) -> Result<LocalBest> {
    let mut global = LocalBest::default();
    let mut completed = 0usize;
    let mut last_error = None;

    for (worker, result) in results.into_iter().enumerate() {
        match result {
            Ok(Some(local)) => {
                completed += 1;
                if local.inliers > global.inliers {
                    global = local;
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!("worker {worker} failed: {err}");
                last_error = Some(err);
            }
        }
    }

    if completed == 0 {
        return Err(last_error.unwrap_or(FitError::WorkerFailed));
    }
    Ok(global)
}
