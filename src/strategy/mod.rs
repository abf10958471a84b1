//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the non-elite part of the next generation out of the current population.
pub mod ordinary;

use std::fmt::Debug;

use crate::{
    error::Result, individual::Individual, population::Population, rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces offspring from a ranked population. The launcher places the
/// elites itself and asks the strategy for exactly the number of children
/// needed to refill the population.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `count` new individuals out of `population`.
    ///
    /// ## Errors
    ///
    /// This method can fail if the population cannot support the selection
    /// operator, for example when it is smaller than the tournament.
    fn breed(
        &self,
        population: &Population,
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use ordinary::OrdinaryStrategy;
