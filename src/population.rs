//! # Population
//!
//! A `Population` is the set of individuals alive in one generation, always
//! ordered by fitness, best first. Sorting is stable, so individuals with the
//! same fitness keep the order in which they were inserted.

use std::ops::Index;

use rayon::prelude::*;

use crate::{
    error::{GeneticError, OptionExt, Result},
    evolution::options::SolverOptions,
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Individuals of one generation, sorted by descending fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `population_size` random individuals and ranks them.
    ///
    /// Genes are always drawn sequentially from `rng`, so a seeded run yields
    /// the same population whether or not scoring runs in parallel. Scoring is
    /// spread over the rayon pool once the population reaches the configured
    /// parallel threshold.
    pub fn random(options: &SolverOptions, rng: &mut RandomNumberGenerator) -> Self {
        let n = options.get_board_size();
        let genomes: Vec<Vec<usize>> = (0..options.get_population_size())
            .map(|_| rng.fetch_indices(n, n))
            .collect();

        Self::from_genomes(genomes, options.get_parallel_threshold())
    }

    /// Scores raw gene vectors and ranks the resulting individuals.
    pub(crate) fn from_genomes(genomes: Vec<Vec<usize>>, parallel_threshold: usize) -> Self {
        let individuals: Vec<Individual> = if genomes.len() >= parallel_threshold {
            tracing::trace!(count = genomes.len(), "scoring population in parallel");
            genomes
                .into_par_iter()
                .map(Individual::from_genes)
                .collect()
        } else {
            genomes.into_iter().map(Individual::from_genes).collect()
        };

        Self::from_individuals(individuals)
    }

    /// Ranks the given individuals by descending fitness.
    pub fn from_individuals(mut individuals: Vec<Individual>) -> Self {
        individuals.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
        Self { individuals }
    }

    /// Returns the fittest individual.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] if the population is empty.
    pub fn best(&self) -> Result<&Individual> {
        self.individuals
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// The `count` fittest individuals, or the whole population if smaller.
    pub fn elites(&self, count: usize) -> &[Individual] {
        &self.individuals[..count.min(self.individuals.len())]
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn into_vec(self) -> Vec<Individual> {
        self.individuals
    }

    /// Returns `true` if no individual is fitter than its predecessor.
    pub fn is_ranked(&self) -> bool {
        self.individuals
            .windows(2)
            .all(|pair| pair[0].fitness() >= pair[1].fitness())
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
