use std::process::ExitCode;

use clap::Parser;
use nqueens_ga::{
    board,
    evolution::{options, EvolutionLauncher, Outcome, SolverOptions, TracingReporter},
    rng::RandomNumberGenerator,
};
use tracing::Level;

/// Solve the N-Queens problem with a genetic algorithm.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Board size (number of queens)
    #[arg(short = 'n', long, default_value_t = options::DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Individuals per generation
    #[arg(short, long, default_value_t = options::DEFAULT_POPULATION_SIZE)]
    population_size: usize,

    /// Generation budget
    #[arg(short = 'g', long, default_value_t = options::DEFAULT_MAX_GENERATIONS)]
    max_generations: usize,

    /// Probability of mutating each offspring
    #[arg(short, long, default_value_t = options::DEFAULT_MUTATION_RATE)]
    mutation_rate: f64,

    /// Top individuals copied unchanged into the next generation
    #[arg(short, long, default_value_t = options::DEFAULT_ELITE_COUNT)]
    elite_count: usize,

    /// Contestants per tournament
    #[arg(short, long, default_value_t = options::DEFAULT_TOURNAMENT_SIZE)]
    tournament_size: usize,

    /// Emit a progress checkpoint every this many generations
    #[arg(short, long, default_value_t = options::DEFAULT_REPORT_EVERY)]
    report_every: usize,

    /// Population size from which scoring runs in parallel
    #[arg(long, default_value_t = options::DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn solver_options(&self) -> SolverOptions {
        SolverOptions::builder()
            .board_size(self.board_size)
            .population_size(self.population_size)
            .max_generations(self.max_generations)
            .mutation_rate(self.mutation_rate)
            .elite_count(self.elite_count)
            .tournament_size(self.tournament_size)
            .report_every(self.report_every)
            .parallel_threshold(self.parallel_threshold)
            .build()
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_target(false)
        .init();

    let launcher = match EvolutionLauncher::new(args.solver_options()) {
        Ok(launcher) => launcher,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let mut reporter = TracingReporter::new().with_board();
    let result = match launcher.evolve(&mut rng, &mut reporter) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match result.outcome {
        Outcome::Solved => println!("Solution found in generation {}", result.generation),
        Outcome::Exhausted => println!(
            "No perfect solution found after {} generations (best fitness {}/{})",
            result.generation,
            result.best.fitness(),
            result.best.max_fitness()
        ),
    }
    print!("{}", board::render(result.best.genes()));

    ExitCode::SUCCESS
}
