//! Injectable randomness for random shuffles.
//!
//! ## Key Features
//!
//! - **Pluggable**: the engine only sees the `RandomSource` trait, so tests
//!   can script every coin flip
//! - **Deterministic**: same seed produces the same sequence of shuffles
//! - **Replayable**: an entropy-seeded RNG still reports its seed
//!
//! ## Usage
//!
//! ```
//! use overhand::core::{RandomSource, ShuffleRng};
//!
//! let mut rng1 = ShuffleRng::new(42);
//! let mut rng2 = ShuffleRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(rng1.gen_bool(0.1), rng2.gen_bool(0.1));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the coin flips that decide where a random shuffle breaks.
pub trait RandomSource {
    /// Return `true` with the given probability.
    ///
    /// `probability` is always within `[0, 1]`.
    fn gen_bool(&mut self, probability: f64) -> bool;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ShuffleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still available through `seed()` so a session can
    /// be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ShuffleRng {
    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
