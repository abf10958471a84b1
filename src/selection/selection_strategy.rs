use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy picks one parent out of the current population.
/// The launcher calls it twice per offspring, independently, so both calls
/// may return the same individual.
///
/// # Examples
///
/// ```
/// use nqueens_ga::evolution::options::SolverOptions;
/// use nqueens_ga::population::Population;
/// use nqueens_ga::rng::RandomNumberGenerator;
/// use nqueens_ga::selection::{SelectionStrategy, TournamentSelection};
/// use nqueens_ga::error::Result;
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let population = Population::random(&SolverOptions::new(6), &mut rng);
///
///     let selection = TournamentSelection::default();
///     let parent = selection.select(&population, &mut rng)?;
///     assert_eq!(parent.board_size(), 6);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot support the strategy, for
    /// example when it is empty or smaller than the tournament.
    fn select<'a>(
        &self,
        population: &'a Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Individual>;
}
