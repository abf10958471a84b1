//! # SinglePointCrossover
//!
//! Cuts both parents at the same column and joins the head of the first to
//! the tail of the second. The cut point is drawn uniformly from `[0, N-1]`:
//! a cut at `0` copies the second parent outright, while the last gene always
//! comes from the second parent.

use crate::{individual::Individual, rng::RandomNumberGenerator};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Recombines two parents at a random cut point.
    ///
    /// Both arguments may be the same individual.
    pub fn crossover(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        let point = rng.gen_index(parent1.board_size());
        self.crossover_at(parent1, parent2, point)
    }

    /// Builds the child `parent1[..point] ++ parent2[point..]`.
    ///
    /// # Panics
    ///
    /// Panics if the parents differ in length or `point` exceeds it.
    pub fn crossover_at(&self, parent1: &Individual, parent2: &Individual, point: usize) -> Individual {
        assert_eq!(
            parent1.board_size(),
            parent2.board_size(),
            "parents must share a board size"
        );

        let genes: Vec<usize> = parent1.genes()[..point]
            .iter()
            .chain(&parent2.genes()[point..])
            .copied()
            .collect();

        Individual::from_genes(genes)
    }
}
