use crate::error::{GeneticError, Result};
use crate::evolution::options::DEFAULT_TOURNAMENT_SIZE;
use crate::individual::Individual;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that picks the best of a small random sample.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly
/// without replacement and returns the fittest of them. When several
/// contestants share the best fitness, the one drawn first wins.
///
/// - Smaller tournaments lead to more exploration (closer to random selection)
/// - Larger tournaments lead to more exploitation (closer to always picking the best)
///
/// A population smaller than the tournament is a configuration error; the
/// sample is never silently truncated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::TournamentTooLarge`] if fewer individuals than
    /// `tournament_size` are available.
    pub fn run_tournament(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if population.len() < self.tournament_size {
            return Err(GeneticError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: population.len(),
            });
        }

        let participants = rng.sample_indices(population.len(), self.tournament_size);

        let mut best_idx = participants[0];
        let mut best_fitness = population[best_idx].fitness();

        for &idx in &participants[1..] {
            let current_fitness = population[idx].fitness();
            if current_fitness > best_fitness {
                best_idx = idx;
                best_fitness = current_fitness;
            }
        }

        tracing::trace!(?participants, winner = best_idx, "tournament");
        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select<'a>(
        &self,
        population: &'a Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Individual> {
        let winner = self.run_tournament(population, rng)?;
        Ok(&population[winner])
    }
}
