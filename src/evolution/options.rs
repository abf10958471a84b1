//! # SolverOptions
//!
//! The `SolverOptions` struct holds every parameter of a solver run. It is
//! built once, validated by the launcher before the first generation and
//! never changed while the run is in progress.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::evolution::options::SolverOptions;
//!
//! // Parameters of the classic 8-queens run
//! let defaults = SolverOptions::default();
//! assert_eq!(defaults.get_board_size(), 8);
//! assert_eq!(defaults.get_max_fitness(), 28);
//!
//! // A smaller board with a custom configuration
//! let options = SolverOptions::builder()
//!     .board_size(6)
//!     .population_size(40)
//!     .elite_count(4)
//!     .mutation_rate(0.2)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `board_size`: `N`, the number of rows and columns.
//! - `population_size`: individuals per generation, constant across the run.
//! - `max_generations`: generation budget before the run is declared exhausted.
//! - `mutation_rate`: probability that an offspring receives one random gene.
//! - `elite_count`: top individuals copied unchanged into the next generation.
//! - `tournament_size`: contestants drawn for each parent selection.
//! - `report_every`: cadence of progress checkpoints.
//! - `parallel_threshold`: population size from which the initial population
//!   is scored on the rayon thread pool.

use crate::{
    error::{GeneticError, Result},
    fitness,
};

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_MAX_GENERATIONS: usize = 1000;
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;
pub const DEFAULT_ELITE_COUNT: usize = 10;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;
pub const DEFAULT_REPORT_EVERY: usize = 50;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    board_size: usize,
    population_size: usize,
    max_generations: usize,
    mutation_rate: f64,
    elite_count: usize,
    tournament_size: usize,
    report_every: usize,
    /// Minimum population size scored in parallel
    parallel_threshold: usize,
}

impl SolverOptions {
    /// Creates options for an `board_size`-queens run, keeping every other
    /// parameter at its default.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_report_every(&self) -> usize {
        self.report_every
    }

    /// Returns the minimum population size scored in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Best reachable fitness, `N * (N - 1) / 2`.
    pub fn get_max_fitness(&self) -> usize {
        fitness::max_fitness(self.board_size)
    }

    /// Checks every parameter combination that would make a run meaningless
    /// or unable to terminate.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - `board_size < 2`
    /// - `population_size <= elite_count`
    /// - `tournament_size` is zero or larger than `population_size`
    /// - `mutation_rate` is not a finite value in `[0, 1]`
    /// - `report_every` is zero
    pub fn validate(&self) -> Result<()> {
        if self.board_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Board size must be at least 2, got {}",
                self.board_size
            )));
        }

        if self.population_size <= self.elite_count {
            return Err(GeneticError::Configuration(format!(
                "Population size ({}) must be larger than elite count ({})",
                self.population_size, self.elite_count
            )));
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if self.tournament_size > self.population_size {
            return Err(GeneticError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }

        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.report_every == 0 {
            return Err(GeneticError::Configuration(
                "Report interval must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating a `SolverOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nqueens_ga::evolution::options::SolverOptions;
    ///
    /// let options = SolverOptions::builder()
    ///     .board_size(10)
    ///     .max_generations(2000)
    ///     .tournament_size(3)
    ///     .report_every(100)
    ///     .build();
    /// assert_eq!(options.get_tournament_size(), 3);
    /// ```
    pub fn builder() -> SolverOptionsBuilder {
        SolverOptionsBuilder::default()
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            elite_count: DEFAULT_ELITE_COUNT,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            report_every: DEFAULT_REPORT_EVERY,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `SolverOptions`.
///
/// Unset parameters fall back to their defaults. `build` does not validate;
/// the launcher does that before running.
#[derive(Debug, Clone, Default)]
pub struct SolverOptionsBuilder {
    board_size: Option<usize>,
    population_size: Option<usize>,
    max_generations: Option<usize>,
    mutation_rate: Option<f64>,
    elite_count: Option<usize>,
    tournament_size: Option<usize>,
    report_every: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl SolverOptionsBuilder {
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn report_every(mut self, value: usize) -> Self {
        self.report_every = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `SolverOptions` instance.
    pub fn build(self) -> SolverOptions {
        SolverOptions {
            board_size: self.board_size.unwrap_or(DEFAULT_BOARD_SIZE),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            max_generations: self.max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            elite_count: self.elite_count.unwrap_or(DEFAULT_ELITE_COUNT),
            tournament_size: self.tournament_size.unwrap_or(DEFAULT_TOURNAMENT_SIZE),
            report_every: self.report_every.unwrap_or(DEFAULT_REPORT_EVERY),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
