//! Deterministic simulation RNG.
//!
//! The two-choice draw is the only source of nondeterminism in a run, so the
//! whole simulation is reproducible from `SimConfig::seed`.  `SmallRng` is
//! fast and seedable; it is not cryptographically secure, which is fine here.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::DeskId;

/// Simulation-level RNG.  Owned by the event loop; never shared.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw two distinct desks uniformly from `0..desk_count`.
    ///
    /// The second index is drawn from the `desk_count - 1` remaining desks and
    /// shifted past the first, so exactly two RNG calls are made per draw.
    ///
    /// # Panics
    /// Panics if `desk_count < 2`; the simulation builder rejects such runs
    /// before any draw happens.
    pub fn pick_two_distinct(&mut self, desk_count: usize) -> (DeskId, DeskId) {
        assert!(desk_count >= 2, "two distinct desks need desk_count >= 2");
        let first = self.0.gen_range(0..desk_count);
        let mut second = self.0.gen_range(0..desk_count - 1);
        if second >= first {
            second += 1;
        }
        (DeskId(first as u32), DeskId(second as u32))
    }
}
