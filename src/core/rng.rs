//! Deterministic random number generation for rooms.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical template draws and CPU
//!   tie-breaks, so whole games replay exactly in tests
//! - **Forkable**: A room forks an independent stream for its computer
//!   opponent, keeping template draws unaffected by how often the CPU moves
//!
//! ```
//! use shape_drop::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut cpu_rng = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut cpu_rng2 = rng2.fork();
//!
//! assert_eq!(cpu_rng.gen_range_usize(0..100), cpu_rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    ///
    /// For production rooms; tests should always use [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let step = self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15);
        let fork_seed = self.seed.wrapping_add(step);
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics on an empty range, like `rand::Rng::gen_range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
