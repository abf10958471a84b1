//! # Reporting
//!
//! The launcher hands its current best individual to a [`Reporter`] at every
//! progress checkpoint and once more when the run ends. Reporters observe
//! only; nothing they do feeds back into the search.
//!
//! Any `FnMut(&Checkpoint)` closure is a reporter:
//!
//! ```rust
//! use nqueens_ga::evolution::{Checkpoint, EvolutionLauncher, SolverOptions};
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let launcher = EvolutionLauncher::new(SolverOptions::new(4)).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let mut checkpoints = Vec::new();
//! let mut record = |checkpoint: &Checkpoint<'_>| checkpoints.push(checkpoint.generation);
//! launcher.evolve(&mut rng, &mut record).unwrap();
//!
//! assert!(!checkpoints.is_empty());
//! ```

use crate::{board, individual::Individual};

/// Why a checkpoint was emitted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckpointKind {
    /// Periodic snapshot; the run continues.
    Progress,
    /// The best individual is a full solution; the run stops.
    Solved,
    /// The generation budget is spent without a solution.
    Exhausted,
}

/// Snapshot of the best individual at one point of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint<'a> {
    pub generation: usize,
    pub genes: &'a [usize],
    pub fitness: usize,
    pub max_fitness: usize,
    pub kind: CheckpointKind,
}

impl<'a> Checkpoint<'a> {
    pub fn new(generation: usize, best: &'a Individual, kind: CheckpointKind) -> Self {
        Self {
            generation,
            genes: best.genes(),
            fitness: best.fitness(),
            max_fitness: best.max_fitness(),
            kind,
        }
    }

    /// `true` for the last checkpoint of a run.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.kind, CheckpointKind::Progress)
    }
}

/// Receives checkpoints from the launcher.
pub trait Reporter {
    fn report(&mut self, checkpoint: &Checkpoint<'_>);
}

impl<F> Reporter for F
where
    F: FnMut(&Checkpoint<'_>),
{
    fn report(&mut self, checkpoint: &Checkpoint<'_>) {
        self(checkpoint)
    }
}

/// Discards every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _checkpoint: &Checkpoint<'_>) {}
}

/// Logs checkpoints through `tracing`.
///
/// Progress and terminal lines go out at `INFO`. When `show_board` is set the
/// rendered board follows every checkpoint, also at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    show_board: bool,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(mut self) -> Self {
        self.show_board = true;
        self
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, checkpoint: &Checkpoint<'_>) {
        match checkpoint.kind {
            CheckpointKind::Progress => tracing::info!(
                generation = checkpoint.generation,
                fitness = checkpoint.fitness,
                max_fitness = checkpoint.max_fitness,
                "progress"
            ),
            CheckpointKind::Solved => tracing::info!(
                generation = checkpoint.generation,
                genes = ?checkpoint.genes,
                "solution found"
            ),
            CheckpointKind::Exhausted => tracing::info!(
                generation = checkpoint.generation,
                fitness = checkpoint.fitness,
                max_fitness = checkpoint.max_fitness,
                genes = ?checkpoint.genes,
                "no perfect solution found"
            ),
        }

        if self.show_board {
            tracing::info!("\n{}", board::render(checkpoint.genes));
        }
    }
}
