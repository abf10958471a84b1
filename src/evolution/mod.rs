pub mod launcher;
pub mod options;
pub mod report;

pub use launcher::{EvolutionLauncher, EvolutionResult, Outcome};
pub use options::{SolverOptions, SolverOptionsBuilder};
pub use report::{Checkpoint, CheckpointKind, NoopReporter, Reporter, TracingReporter};
