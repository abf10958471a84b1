//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! solver run. Every operator takes it by `&mut` so that a run seeded with
//! [`RandomNumberGenerator::from_seed`] is reproducible draw for draw.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let row = rng.gen_index(8);
//! assert!(row < 8);
//!
//! let contestants = rng.sample_indices(100, 5);
//! assert_eq!(contestants.len(), 5);
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// evolutionary operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform integer in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws a uniform float in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with probability `probability`.
    ///
    /// The comparison is strict, so `0.0` never fires and `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.gen_unit() < probability
    }

    /// Draws `amount` distinct indices from `[0, length)` in random order.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`. Callers validate the sample size first.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }

    /// Draws `len` independent uniform integers in `[0, upper)`.
    pub fn fetch_indices(&mut self, upper: usize, len: usize) -> Vec<usize> {
        (0..len).map(|_| self.gen_index(upper)).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
