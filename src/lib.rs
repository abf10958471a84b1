pub mod board;
pub mod breeding;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionResult, Outcome, SolverOptions};
pub use individual::Individual;
pub use population::Population;
pub use rng::RandomNumberGenerator;
