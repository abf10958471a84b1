use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nqueens_ga::{
    evolution::{EvolutionLauncher, NoopReporter, SolverOptions},
    fitness,
    rng::RandomNumberGenerator,
};

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    for n in [8, 16, 32, 64].iter() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let genes = rng.fetch_indices(*n, *n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &genes, |b, genes| {
            b.iter(|| fitness::evaluate(black_box(genes)))
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for size in [100, 1000, 10000].iter() {
        let options = SolverOptions::builder()
            .board_size(16)
            .population_size(*size)
            .elite_count(size / 10)
            .build();
        let launcher = EvolutionLauncher::new(options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = launcher.initial_population(&mut rng);

        group.bench_function(format!("generation_{}", size), |b| {
            b.iter(|| {
                let next = launcher
                    .evolve_generation(black_box(&population), black_box(&mut rng))
                    .unwrap();
                black_box(next)
            })
        });
    }
    group.finish();
}

fn bench_initial_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("initial_population");
    for threshold in [usize::MAX, 1].iter() {
        let options = SolverOptions::builder()
            .board_size(32)
            .population_size(5000)
            .parallel_threshold(*threshold)
            .build();
        let launcher = EvolutionLauncher::new(options).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let label = if *threshold == 1 { "parallel" } else { "sequential" };

        group.bench_function(label, |b| {
            b.iter(|| black_box(launcher.initial_population(&mut rng)))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let launcher = EvolutionLauncher::new(SolverOptions::default()).unwrap();
    c.bench_function("solve_8_queens", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut rng = RandomNumberGenerator::from_seed(seed);
            black_box(launcher.evolve(&mut rng, &mut NoopReporter).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_fitness,
    bench_generation,
    bench_initial_population,
    bench_solve
);
criterion_main!(benches);
