//! # Error Types
//!
//! This module defines the error type of the solver. Almost every failure the
//! solver can report is a configuration problem detected before the first
//! generation runs: the evolutionary operators themselves are total over the
//! inputs the launcher hands them.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, Result};
//!
//! fn check_board(n: usize) -> Result<()> {
//!     if n < 2 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Board size must be at least 2, got {}",
//!             n
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_board(8).is_ok());
//! assert!(check_board(1).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, OptionExt};
//!
//! fn best_fitness(scores: &[usize]) -> nqueens_ga::error::Result<usize> {
//!     scores.iter().max().copied().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(best_fitness(&[3, 6, 1]).unwrap(), 6);
//! assert!(best_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a tournament asks for more contestants than exist.
    #[error(
        "Configuration error: tournament size {tournament_size} exceeds population size {population_size}"
    )]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },
}

impl GeneticError {
    /// Returns `true` for every variant that stems from invalid parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GeneticError::Configuration(_) | GeneticError::TournamentTooLarge { .. }
        )
    }
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
