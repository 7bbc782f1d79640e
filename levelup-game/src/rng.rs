//! Injectable randomness for the engine.
//!
//! Only two branches of the simulation are nondeterministic: the sport
//! injury roll and the morning motivation roll. Both draw from an
//! [`RngSource`] so a harness can substitute a fixed source and make every
//! outcome reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Uniform random source consumed by the simulation.
pub trait RngSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform draw in `[0, 100)`, the percent scale used by injury risk.
    fn percent(&mut self) -> f64 {
        self.unit() * 100.0
    }
}

/// Seeded ChaCha stream. One per session, so a run replays exactly from its
/// share code.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: ChaCha20Rng,
}

impl SessionRng {
    /// Construct the stream from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RngSource for SessionRng {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Source that always returns the same unit value. Used by tests to force or
/// forbid the injury and motivation branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRng(pub f64);

impl RngSource for FixedRng {
    fn unit(&mut self) -> f64 {
        self.0
    }
}
