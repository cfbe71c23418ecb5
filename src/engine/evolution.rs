//! Generational evolution loop.
//!
//! The engine owns its RNG and reads nothing but the snapshot and grid it is
//! handed, so concurrent runs share no state. A run is a blocking, CPU-bound
//! computation: seed a population from the gene pool, then score, rank, and
//! breed until the early-stop threshold or the generation cap is hit.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::catalog::CatalogSnapshot;
use crate::config::evolution::EvolutionConfig;
use crate::grid::GridSpec;

use super::chromosome::{Chromosome, GenePool};
use super::fitness;
use super::operators::{crossover, mutate};
use super::progress::ProgressCallback;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The top-ranked score reached the early-stop threshold.
    EarlyStop,
    /// The generation cap elapsed without an early stop.
    GenerationCapReached,
}

/// Final state of a finished run.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub best: Chromosome,
    pub best_score: i64,
    /// Generations evaluated before termination.
    pub generations: usize,
    pub termination: Termination,
}

/// The evolution driver.
///
/// Stateless across runs apart from its RNG stream; populations and gene
/// pools are created per run and discarded when [`run`] returns.
///
/// [`run`]: EvolutionEngine::run
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Runs the full evolutionary search and returns the best schedule found.
    ///
    /// The snapshot is the only catalog state the run ever observes; writes
    /// made to the catalog after it was taken have no effect. Never fails:
    /// a structurally valid snapshot always yields a chromosome matching
    /// `grid`, at worst a low-scoring one.
    pub fn run<C: ProgressCallback>(
        &mut self,
        snapshot: &CatalogSnapshot,
        grid: &GridSpec,
        mut callback: C,
    ) -> EvolutionOutcome {
        let pool = GenePool::build(snapshot, grid, &mut self.rng);
        let mut population: Vec<Chromosome> = (0..self.config.population_size)
            .map(|_| Chromosome::random(&pool, grid, &mut self.rng))
            .collect();

        let elite_count =
            (self.config.population_size as f64 * self.config.elite_fraction) as usize;
        let breeding_pool = self
            .config
            .breeding_pool_size
            .min(self.config.population_size);

        info!(
            "Starting run: {} subjects, {}x{} grid, population {}, cap {}",
            snapshot.len(),
            grid.day_count(),
            grid.slots_per_day,
            self.config.population_size,
            self.config.generation_cap
        );

        for generation in 0..self.config.generation_cap {
            callback.on_generation_start(generation);

            let mut ranked = rank(population, snapshot);
            let best_score = ranked[0].1;
            callback.on_generation_complete(generation, best_score);
            debug!("Generation {}: best score {}", generation + 1, best_score);

            if best_score >= self.config.early_stop_threshold {
                info!(
                    "Early stop at generation {} with score {}",
                    generation + 1,
                    best_score
                );
                let (best, best_score) = ranked.swap_remove(0);
                return EvolutionOutcome {
                    best,
                    best_score,
                    generations: generation + 1,
                    termination: Termination::EarlyStop,
                };
            }

            // Elitism: carry the top ranks forward unchanged
            let mut next: Vec<Chromosome> = ranked
                .iter()
                .take(elite_count)
                .map(|(chromosome, _)| chromosome.clone())
                .collect();

            // Refill from the breeding pool: parents drawn uniformly with
            // replacement, one child per crossover, mutation by coin flip
            while next.len() < self.config.population_size {
                let p1 = &ranked[self.rng.gen_range(0..breeding_pool)].0;
                let p2 = &ranked[self.rng.gen_range(0..breeding_pool)].0;
                let mut child = crossover(p1, p2, &mut self.rng);
                if self.rng.gen::<f64>() < self.config.mutation_probability {
                    mutate(&mut child, &mut self.rng);
                }
                next.push(child);
            }

            population = next;
        }

        let mut ranked = rank(population, snapshot);
        let (best, best_score) = ranked.swap_remove(0);
        info!(
            "Generation cap reached after {} generations, best score {}",
            self.config.generation_cap, best_score
        );
        EvolutionOutcome {
            best,
            best_score,
            generations: self.config.generation_cap,
            termination: Termination::GenerationCapReached,
        }
    }
}

/// Scores the whole population in parallel and sorts it best-first.
///
/// Scoring is pure, so the parallel map is order-preserving and the sort is
/// stable: chromosomes with equal scores keep their prior population order.
/// Rankings are therefore reproducible regardless of evaluation order.
fn rank(
    population: Vec<Chromosome>,
    snapshot: &CatalogSnapshot,
) -> Vec<(Chromosome, i64)> {
    let scores: Vec<i64> = population
        .par_iter()
        .map(|chromosome| fitness::score(chromosome, snapshot))
        .collect();

    let mut ranked: Vec<(Chromosome, i64)> = population.into_iter().zip(scores).collect();
    ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::progress::ConsoleProgressCallback;

    fn snapshot(entries: &[(&str, u32)]) -> CatalogSnapshot {
        entries
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    fn test_config(seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            generation_cap: 40,
            population_size: 20,
            early_stop_threshold: 90,
            breeding_pool_size: 10,
            mutation_probability: 0.3,
            elite_fraction: 0.5,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_run_matches_grid() {
        let snap = snapshot(&[("Math", 3), ("Physics", 2)]);
        let grid = GridSpec::new(vec!["Mon".into(), "Tue".into(), "Wed".into()], 4);

        let mut engine = EvolutionEngine::new(test_config(42));
        let outcome = engine.run(&snap, &grid, ConsoleProgressCallback);

        assert!(outcome.best.matches_grid(&grid));
        assert_eq!(outcome.best.gene_count(), grid.capacity());
    }

    #[test]
    fn test_empty_catalog_stops_early() {
        // All-free schedules score exactly the baseline, above the threshold
        let snap = CatalogSnapshot::new();
        let grid = GridSpec::default();

        let mut engine = EvolutionEngine::new(test_config(42));
        let outcome = engine.run(&snap, &grid, ConsoleProgressCallback);

        assert_eq!(outcome.termination, Termination::EarlyStop);
        assert_eq!(outcome.generations, 1);
        assert_eq!(outcome.best_score, 100);
        assert!(outcome.best.genes().all(|g| g.is_free()));
    }

    #[test]
    fn test_unreachable_threshold_runs_to_cap() {
        let snap = snapshot(&[("Math", 2)]);
        let grid = GridSpec::new(vec!["Mon".into()], 3);

        let mut config = test_config(42);
        config.generation_cap = 5;
        config.early_stop_threshold = i64::MAX;

        let mut engine = EvolutionEngine::new(config);
        let outcome = engine.run(&snap, &grid, ConsoleProgressCallback);

        assert_eq!(outcome.termination, Termination::GenerationCapReached);
        assert_eq!(outcome.generations, 5);
        assert!(outcome.best.matches_grid(&grid));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let snap = snapshot(&[("Math", 4), ("Physics", 3), ("Chemistry", 2)]);
        let grid = GridSpec::default();

        let run = |seed| {
            let mut engine = EvolutionEngine::new(test_config(seed));
            engine.run(&snap, &grid, ConsoleProgressCallback)
        };

        let first = run(7);
        let second = run(7);
        assert_eq!(first.best, second.best);
        assert_eq!(first.best_score, second.best_score);
        assert_eq!(first.generations, second.generations);
    }

    #[test]
    fn test_breeding_pool_clamped_to_small_population() {
        let snap = snapshot(&[("Math", 2), ("Physics", 2)]);
        let grid = GridSpec::new(vec!["Mon".into(), "Tue".into()], 3);

        let mut config = test_config(42);
        config.population_size = 4;
        config.breeding_pool_size = 10;
        config.generation_cap = 10;
        config.early_stop_threshold = i64::MAX;

        // Must not sample outside the 4-member population
        let mut engine = EvolutionEngine::new(config);
        let outcome = engine.run(&snap, &grid, ConsoleProgressCallback);
        assert!(outcome.best.matches_grid(&grid));
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let snap = snapshot(&[("Math", 1)]);
        let a = Chromosome::from_days(vec![vec![
            crate::engine::chromosome::Gene::Subject("Math".into()),
            crate::engine::chromosome::Gene::Free,
        ]]);
        let b = a.clone();
        let c = Chromosome::from_days(vec![vec![
            crate::engine::chromosome::Gene::Free,
            crate::engine::chromosome::Gene::Subject("Math".into()),
        ]]);

        // a, b, c all score identically; order in == order out
        let ranked = rank(vec![a.clone(), c.clone(), b.clone()], &snap);
        assert_eq!(ranked[0].0, a);
        assert_eq!(ranked[1].0, c);
        assert_eq!(ranked[2].0, b);
    }
}
