//! Minimal-sample drawing for line trials.

use crate::types::Observation;
use crate::utils::UniformIndexGenerator;

/// Draws a minimal sample set of two observation indices whose
/// x-coordinates differ.
///
/// The first index is uniform over the store; the second is redrawn until
/// its x-coordinate differs from the first's, up to `max_retries` attempts.
/// Bounding the retries keeps a degenerate store (every observation sharing
/// one x) from stalling a worker forever.
pub struct DistinctXSampler {
    rng: UniformIndexGenerator,
    max_retries: usize,
}

impl DistinctXSampler {
    /// Construct a sampler with a random seed.
    pub fn new(max_retries: usize) -> Self {
        Self {
            rng: UniformIndexGenerator::new(),
            max_retries,
        }
    }

    /// Construct a sampler from a fixed seed (primarily for tests).
    pub fn from_seed(seed: u64, max_retries: usize) -> Self {
        Self {
            rng: UniformIndexGenerator::from_seed(seed),
            max_retries,
        }
    }

    /// Draw one minimal sample, or `None` if the retry budget was exhausted
    /// without finding a second point of distinct x.
    pub fn sample(&mut self, observations: &[Observation]) -> Option<(usize, usize)> {
        debug_assert!(observations.len() >= crate::types::MSS_SIZE);

        let n = observations.len();
        let first = self.rng.next_index(n);
        let x0 = observations[first].x;

        for _ in 0..self.max_retries {
            let second = self.rng.next_index(n);
            if observations[second].x != x0 {
                return Some((first, second));
            }
        }
        None
    }
}
