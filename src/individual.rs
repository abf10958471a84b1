//! # Individual
//!
//! An `Individual` is one candidate board: `genes[c]` is the row of the queen
//! standing in column `c`. Its fitness is cached next to the genes and every
//! constructor or in-place change re-evaluates it, so a stale score cannot be
//! observed from outside the crate.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::individual::Individual;
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let solved = Individual::new(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(solved.fitness(), 6);
//! assert!(solved.is_solution());
//!
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let random = Individual::random(8, &mut rng);
//! assert_eq!(random.genes().len(), 8);
//! assert!(random.fitness() <= 28);
//! ```

use std::fmt;

use crate::{
    error::{GeneticError, Result},
    fitness,
    rng::RandomNumberGenerator,
};

/// A board placement together with its number of non-attacking queen pairs.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawIndividual")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    genes: Vec<usize>,
    fitness: usize,
}

impl Individual {
    /// Builds an individual from caller-supplied genes.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `genes` is empty or any row is outside
    /// `[0, genes.len())`.
    pub fn new(genes: Vec<usize>) -> Result<Self> {
        let n = genes.len();
        if n == 0 {
            return Err(GeneticError::Configuration(
                "An individual needs at least one gene".to_string(),
            ));
        }
        if let Some((column, &row)) = genes.iter().enumerate().find(|(_, &row)| row >= n) {
            return Err(GeneticError::Configuration(format!(
                "Gene {} places a queen on row {} of a {}x{} board",
                column, row, n, n
            )));
        }
        Ok(Self::from_genes(genes))
    }

    /// Builds an individual from genes already known to be in range.
    pub(crate) fn from_genes(genes: Vec<usize>) -> Self {
        let fitness = fitness::evaluate(&genes);
        Self { genes, fitness }
    }

    /// Draws `n` independent uniform rows in `[0, n)`.
    pub fn random(n: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self::from_genes(rng.fetch_indices(n, n))
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// Board size `N`, i.e. the number of columns.
    pub fn board_size(&self) -> usize {
        self.genes.len()
    }

    pub fn max_fitness(&self) -> usize {
        fitness::max_fitness(self.genes.len())
    }

    pub fn is_solution(&self) -> bool {
        self.fitness == self.max_fitness()
    }

    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    /// Moves the queen of `column` to `row` and re-scores the board.
    pub(crate) fn replace_gene(&mut self, column: usize, row: usize) {
        debug_assert!(row < self.genes.len());
        self.genes[column] = row;
        self.fitness = fitness::evaluate(&self.genes);
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({}/{})", self.genes, self.fitness, self.max_fitness())
    }
}

impl TryFrom<Vec<usize>> for Individual {
    type Error = GeneticError;

    fn try_from(genes: Vec<usize>) -> Result<Self> {
        Self::new(genes)
    }
}

// Incoming fitness values are ignored and re-evaluated from the genes.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIndividual {
    genes: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIndividual> for Individual {
    type Error = GeneticError;

    fn try_from(raw: RawIndividual) -> Result<Self> {
        Self::new(raw.genes)
    }
}
