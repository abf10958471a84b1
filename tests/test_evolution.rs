use std::collections::HashSet;

use nqueens_ga::{
    error::GeneticError,
    evolution::{Checkpoint, CheckpointKind, EvolutionLauncher, NoopReporter, Outcome, SolverOptions},
    fitness,
    rng::RandomNumberGenerator,
};

#[test]
fn test_four_queens_is_solved() {
    let launcher = EvolutionLauncher::new(SolverOptions::new(4)).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut terminal = Vec::new();
    let mut reporter = |c: &Checkpoint<'_>| {
        if c.is_terminal() {
            terminal.push((c.genes.to_vec(), c.fitness, c.kind));
        }
    };
    let result = launcher.evolve(&mut rng, &mut reporter).unwrap();

    assert_eq!(result.outcome, Outcome::Solved);
    assert!(result.generation <= 1000);
    assert_eq!(result.best.fitness(), 6);
    assert!(
        result.best.genes() == [1, 3, 0, 2] || result.best.genes() == [2, 0, 3, 1],
        "unexpected solution {:?}",
        result.best.genes()
    );
    assert_eq!(
        terminal,
        vec![(result.best.genes().to_vec(), 6, CheckpointKind::Solved)]
    );
}

#[test]
fn test_eight_queens_stuck_run_reports_exhaustion() {
    // Seed 7 stalls one conflict short of a solution on the default 8-queens run.
    let launcher = EvolutionLauncher::new(SolverOptions::default()).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let mut terminal = Vec::new();
    let mut reporter = |c: &Checkpoint<'_>| {
        if c.is_terminal() {
            terminal.push((c.generation, c.kind, c.fitness));
        }
    };
    let result = launcher.evolve(&mut rng, &mut reporter).unwrap();

    assert_eq!(result.outcome, Outcome::Exhausted);
    assert_eq!(result.generation, 1000);
    assert!(result.best.fitness() < 28);
    assert!(!fitness::is_solution(result.best.genes()));
    assert_eq!(result.best.fitness(), fitness::evaluate(result.best.genes()));
    assert_eq!(
        terminal,
        vec![(1000, CheckpointKind::Exhausted, result.best.fitness())]
    );
}

#[test]
fn test_same_seed_same_run() {
    let options = SolverOptions::builder().board_size(6).max_generations(200).build();
    let launcher = EvolutionLauncher::new(options).unwrap();

    let a = launcher
        .evolve(&mut RandomNumberGenerator::from_seed(99), &mut NoopReporter)
        .unwrap();
    let b = launcher
        .evolve(&mut RandomNumberGenerator::from_seed(99), &mut NoopReporter)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unsolvable_board_reports_progress_then_exhaustion() {
    // No 3-queens placement exists, so the run always spends its budget.
    let options = SolverOptions::builder()
        .board_size(3)
        .population_size(10)
        .elite_count(2)
        .max_generations(20)
        .report_every(5)
        .build();
    let launcher = EvolutionLauncher::new(options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut checkpoints = Vec::new();
    let mut reporter = |c: &Checkpoint<'_>| checkpoints.push((c.generation, c.kind, c.fitness));
    let result = launcher.evolve(&mut rng, &mut reporter).unwrap();

    assert_eq!(result.outcome, Outcome::Exhausted);
    assert_eq!(result.generation, 20);
    assert!(!result.is_solution());

    let schedule: Vec<(usize, CheckpointKind)> =
        checkpoints.iter().map(|&(g, k, _)| (g, k)).collect();
    assert_eq!(
        schedule,
        vec![
            (5, CheckpointKind::Progress),
            (10, CheckpointKind::Progress),
            (15, CheckpointKind::Progress),
            (20, CheckpointKind::Progress),
            (20, CheckpointKind::Exhausted),
        ]
    );

    // Elitism keeps the best fitness from ever dropping.
    let fitnesses: Vec<usize> = checkpoints.iter().map(|&(_, _, f)| f).collect();
    assert!(fitnesses.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*fitnesses.last().unwrap(), result.best.fitness());
}

#[test]
fn test_generations_preserve_size_order_and_elites() {
    let options = SolverOptions::builder()
        .board_size(10)
        .population_size(60)
        .elite_count(10)
        .build();
    let launcher = EvolutionLauncher::new(options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(2024);
    let mut population = launcher.initial_population(&mut rng);

    for _ in 0..50 {
        let elites = population.elites(10).to_vec();
        let next = launcher.evolve_generation(&population, &mut rng).unwrap();

        assert_eq!(next.len(), 60);
        assert!(next.is_ranked());
        for elite in &elites {
            assert!(
                next.iter().any(|ind| ind == elite),
                "elite {} was lost",
                elite
            );
        }
        population = next;
    }
}

#[test]
fn test_zero_mutation_only_recombines() {
    let options = SolverOptions::builder()
        .board_size(8)
        .population_size(40)
        .elite_count(4)
        .mutation_rate(0.0)
        .build();
    let launcher = EvolutionLauncher::new(options).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(5);
    let initial = launcher.initial_population(&mut rng);

    // Rows available at each column in the initial population.
    let pools: Vec<HashSet<usize>> = (0..8)
        .map(|column| initial.iter().map(|ind| ind.genes()[column]).collect())
        .collect();

    let mut population = initial.clone();
    for _ in 0..100 {
        population = launcher.evolve_generation(&population, &mut rng).unwrap();
        for individual in &population {
            for (column, row) in individual.genes().iter().enumerate() {
                assert!(pools[column].contains(row));
            }
        }
    }
}

#[test]
fn test_invalid_configurations_fail_before_running() {
    let cases = vec![
        SolverOptions::new(1),
        SolverOptions::builder().population_size(10).elite_count(10).build(),
        SolverOptions::builder().population_size(10).elite_count(12).build(),
        SolverOptions::builder()
            .population_size(4)
            .elite_count(1)
            .tournament_size(5)
            .build(),
        SolverOptions::builder().mutation_rate(-0.5).build(),
        SolverOptions::builder().mutation_rate(1.5).build(),
        SolverOptions::builder().report_every(0).build(),
    ];

    for options in cases {
        let err = EvolutionLauncher::new(options.clone()).unwrap_err();
        assert!(err.is_configuration(), "{:?} gave {:?}", options, err);
    }
}

#[test]
fn test_tournament_error_is_typed() {
    let options = SolverOptions::builder()
        .population_size(3)
        .elite_count(0)
        .build();
    assert_eq!(
        EvolutionLauncher::new(options).unwrap_err(),
        GeneticError::TournamentTooLarge {
            tournament_size: 5,
            population_size: 3,
        }
    );
}
