//! # RandomResetMutation
//!
//! With probability `rate`, moves the queen of one random column to a random
//! row. The new row may equal the old one. Fitness is re-evaluated in the
//! same step as the gene change.

use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomResetMutation {
    rate: f64,
}

impl RandomResetMutation {
    /// # Errors
    ///
    /// Returns a configuration error if `rate` is not a finite value in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mutates `individual` in place and reports whether the mutation fired.
    ///
    /// The caller must be the sole owner of `individual`; the launcher only
    /// passes freshly bred offspring here.
    pub fn mutate(&self, individual: &mut Individual, rng: &mut RandomNumberGenerator) -> bool {
        if !rng.chance(self.rate) {
            return false;
        }

        let n = individual.board_size();
        let column = rng.gen_index(n);
        let row = rng.gen_index(n);
        individual.replace_gene(column, row);
        true
    }
}
