//! Deterministic RNG wrapper for routing-side randomness.
//!
//! The only consumer today is the randomized-pivot ranking sort.  Seeding
//! comes from [`RouteConfig::seed`](crate::RouteConfig) so a run with the
//! same graph and seed orders equal-distance destinations identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG injected into every operation that needs randomness.
///
/// Each session owns its own instance; nothing here is shared across threads.
pub struct RouteRng(SmallRng);

impl RouteRng {
    pub fn new(seed: u64) -> Self {
        RouteRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
