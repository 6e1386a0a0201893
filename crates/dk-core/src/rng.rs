//! Deterministic RNG wrapper for generated item streams.
//!
//! Synthetic scripts (demo load, randomized property checks) must be
//! reproducible from a seed so a failing run can be replayed exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for producing candidate streams.
///
/// Used only in single-threaded contexts, like the lane itself.
pub struct LaneRng(SmallRng);

impl LaneRng {
    pub fn new(seed: u64) -> Self {
        LaneRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
