//! # OrdinaryStrategy
//!
//! The classic generational recipe: every child comes from two independently
//! selected parents, a single-point crossover and one mutation draw.
use super::BreedStrategy;
use crate::{
    breeding::{RandomResetMutation, SinglePointCrossover},
    error::Result,
    evolution::options::SolverOptions,
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};

/// # OrdinaryStrategy
///
/// Select, select, crossover, mutate; repeated once per requested child.
/// Parents are only borrowed, so the mutation always lands on a fresh child
/// and never on an individual that survives into the next generation.
#[derive(Debug, Clone)]
pub struct OrdinaryStrategy<S = TournamentSelection>
where
    S: SelectionStrategy + Clone,
{
    selection: S,
    crossover: SinglePointCrossover,
    mutation: RandomResetMutation,
}

impl OrdinaryStrategy<TournamentSelection> {
    /// Builds the strategy described by `options`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero tournament size or a mutation
    /// rate outside `[0, 1]`.
    pub fn from_options(options: &SolverOptions) -> Result<Self> {
        Ok(Self::new(
            TournamentSelection::new(options.get_tournament_size())?,
            RandomResetMutation::new(options.get_mutation_rate())?,
        ))
    }
}

impl<S> OrdinaryStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    pub fn new(selection: S, mutation: RandomResetMutation) -> Self {
        Self {
            selection,
            crossover: SinglePointCrossover::new(),
            mutation,
        }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn mutation(&self) -> &RandomResetMutation {
        &self.mutation
    }

    /// Breeds a single child.
    pub fn breed_one(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        let parent1 = self.selection.select(population, rng)?;
        let parent2 = self.selection.select(population, rng)?;
        let mut child = self.crossover.crossover(parent1, parent2, rng);
        self.mutation.mutate(&mut child, rng);
        Ok(child)
    }
}

impl<S> BreedStrategy for OrdinaryStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    fn breed(
        &self,
        population: &Population,
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        (0..count)
            .map(|_| self.breed_one(population, rng))
            .collect()
    }
}
