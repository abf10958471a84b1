use super::{
    options::SolverOptions,
    report::{Checkpoint, CheckpointKind, Reporter},
};
use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, OrdinaryStrategy},
};

/// How a run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A placement without attacking pairs was found.
    Solved,
    /// The generation budget ran out first.
    Exhausted,
}

/// Represents the result of an evolution: the best individual and where the run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// Best individual of the last population examined.
    pub best: Individual,
    /// Generation at which the run stopped.
    pub generation: usize,
    pub outcome: Outcome,
}

impl EvolutionResult {
    pub fn is_solution(&self) -> bool {
        self.best.is_solution()
    }
}

/// Drives the generational loop for one board size and parameter set.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy = OrdinaryStrategy>
where
    Strategy: BreedStrategy,
{
    options: SolverOptions,
    strategy: Strategy,
}

impl EvolutionLauncher<OrdinaryStrategy> {
    /// Creates a launcher with the tournament/single-point/random-reset recipe.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `options` fail [`SolverOptions::validate`].
    pub fn new(options: SolverOptions) -> Result<Self> {
        options.validate()?;
        let strategy = OrdinaryStrategy::from_options(&options)?;
        Ok(Self { options, strategy })
    }
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Creates a launcher with a custom breeding strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `options` fail [`SolverOptions::validate`].
    pub fn with_strategy(options: SolverOptions, strategy: Strategy) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, strategy })
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Draws and ranks a fresh random population.
    pub fn initial_population(&self, rng: &mut RandomNumberGenerator) -> Population {
        Population::random(&self.options, rng)
    }

    /// Derives the next generation from `population`.
    ///
    /// The top `elite_count` individuals are carried over unchanged; the rest
    /// is filled by the breeding strategy. The result is ranked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the breeding strategy fails, or if it returns a
    /// number of children other than requested or children of another board size.
    pub fn evolve_generation(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let target = self.options.get_population_size();
        let mut next_generation: Vec<Individual> = Vec::with_capacity(target);
        next_generation.extend_from_slice(population.elites(self.options.get_elite_count()));

        let missing = target.saturating_sub(next_generation.len());
        let children = self.strategy.breed(population, missing, rng)?;
        self.check_offspring(&children, missing)?;
        next_generation.extend(children);

        Ok(Population::from_individuals(next_generation))
    }

    /// Runs the search from a fresh random population.
    ///
    /// Returns once a solution is found or `max_generations` generations have
    /// passed. Running out of generations is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if breeding fails, which a validated
    /// configuration rules out.
    pub fn evolve<R>(
        &self,
        rng: &mut RandomNumberGenerator,
        reporter: &mut R,
    ) -> Result<EvolutionResult>
    where
        R: Reporter + ?Sized,
    {
        let population = self.initial_population(rng);
        self.evolve_from(population, rng, reporter)
    }

    /// Runs the search starting from a caller-supplied population.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the population does not match the
    /// configured population size or board size.
    pub fn evolve_from<R>(
        &self,
        mut population: Population,
        rng: &mut RandomNumberGenerator,
        reporter: &mut R,
    ) -> Result<EvolutionResult>
    where
        R: Reporter + ?Sized,
    {
        self.check_population(&population)?;

        let max_fitness = self.options.get_max_fitness();
        let report_every = self.options.get_report_every();
        let max_generations = self.options.get_max_generations();

        tracing::info!(
            board_size = self.options.get_board_size(),
            population_size = self.options.get_population_size(),
            max_generations,
            "starting evolution"
        );

        for generation in 1..=max_generations {
            let best = population.best()?;
            tracing::debug!(generation, best_fitness = best.fitness(), "generation");

            if best.fitness() == max_fitness {
                reporter.report(&Checkpoint::new(generation, best, CheckpointKind::Solved));
                tracing::info!(generation, "solved");
                return Ok(EvolutionResult {
                    best: best.clone(),
                    generation,
                    outcome: Outcome::Solved,
                });
            }

            if generation % report_every == 0 {
                reporter.report(&Checkpoint::new(generation, best, CheckpointKind::Progress));
            }

            population = self.evolve_generation(&population, rng)?;
        }

        let best = population.best()?;
        reporter.report(&Checkpoint::new(
            max_generations,
            best,
            CheckpointKind::Exhausted,
        ));
        tracing::info!(
            max_generations,
            best_fitness = best.fitness(),
            max_fitness,
            "generation budget exhausted"
        );

        Ok(EvolutionResult {
            best: best.clone(),
            generation: max_generations,
            outcome: Outcome::Exhausted,
        })
    }

    fn check_offspring(&self, children: &[Individual], requested: usize) -> Result<()> {
        if children.len() != requested {
            return Err(GeneticError::Configuration(format!(
                "Breeding strategy returned {} children, expected {}",
                children.len(),
                requested
            )));
        }

        let n = self.options.get_board_size();
        if let Some(stray) = children.iter().find(|child| child.board_size() != n) {
            return Err(GeneticError::Configuration(format!(
                "Offspring {} does not fit a {}x{} board",
                stray, n, n
            )));
        }

        Ok(())
    }

    fn check_population(&self, population: &Population) -> Result<()> {
        if population.len() != self.options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Population holds {} individuals, expected {}",
                population.len(),
                self.options.get_population_size()
            )));
        }

        let n = self.options.get_board_size();
        if let Some(stray) = population.iter().find(|ind| ind.board_size() != n) {
            return Err(GeneticError::Configuration(format!(
                "Individual {} does not fit a {}x{} board",
                stray, n, n
            )));
        }

        Ok(())
    }
}
