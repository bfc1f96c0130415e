//! Random-number helpers shared across samplers.

use rand::prelude::*;

/// Uniform index generator backed by a privately owned `StdRng`.
///
/// Each worker owns one, so trial sampling never contends on a shared
/// generator. Production code seeds randomly; tests can fix the seed.
pub struct UniformIndexGenerator {
    rng: StdRng,
}

impl Default for UniformIndexGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformIndexGenerator {
    /// Construct with a random seed.
    pub fn new() -> Self {
        let rng = StdRng::from_rng(thread_rng()).expect("failed to seed StdRng");
        Self { rng }
    }

    /// Construct with a fixed seed (useful for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a uniformly random index in `[0, n)`.
    pub fn next_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
