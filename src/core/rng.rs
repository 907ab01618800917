//! Seedable random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deck order
//! - **Entropy-backed**: `from_entropy` for real play
//! - **Replayable**: the seed is kept so a deal can be reproduced
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec!["A", "A", "B", "B"];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same order
//! let mut again = vec!["A", "A", "B", "B"];
//! GameRng::new(42).shuffle(&mut again);
//! assert_eq!(deck, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to shuffle decks.
///
/// Backed by ChaCha8. Every permutation of a deck is equally likely, and a
/// seeded RNG deals the same sequence of decks every time.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Seeded RNG, for reproducible deals.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system (or browser) entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick an index uniformly from `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place and hand it back.
    ///
    /// Fisher-Yates: walk `i` from the last index down to 1 and swap it with
    /// a uniformly chosen `j` in `0..=i`.
    pub fn shuffle<'a, T>(&mut self, items: &'a mut [T]) -> &'a mut [T] {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i);
            items.swap(i, j);
        }
        items
    }
}
