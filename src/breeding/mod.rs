//! Variation operators applied to selected parents.
pub mod crossover;
pub mod mutation;

pub use crossover::SinglePointCrossover;
pub use mutation::RandomResetMutation;
