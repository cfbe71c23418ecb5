use serde::{Deserialize, Serialize};

use super::traits::ConfigSection;
use crate::error::TimegenError;

/// Tunables for the evolution driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Maximum number of generations before the run returns its best.
    pub generation_cap: usize,
    /// Chromosomes per generation.
    pub population_size: usize,
    /// Score at or above which a run terminates immediately.
    pub early_stop_threshold: i64,
    /// Parents are drawn from this many top-ranked chromosomes, clamped to
    /// the population size.
    pub breeding_pool_size: usize,
    /// Chance that a bred child receives one mutation.
    pub mutation_probability: f64,
    /// Fraction of the ranked population carried forward unchanged.
    pub elite_fraction: f64,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generation_cap: 300,
            population_size: 50,
            early_stop_threshold: 90,
            breeding_pool_size: 10,
            mutation_probability: 0.3,
            elite_fraction: 0.5,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), TimegenError> {
        if self.population_size < 2 {
            return Err(TimegenError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.generation_cap == 0 {
            return Err(TimegenError::Configuration(
                "Generation cap must be at least 1".to_string(),
            ));
        }
        if self.breeding_pool_size == 0 {
            return Err(TimegenError::Configuration(
                "Breeding pool size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(TimegenError::Configuration(
                "Mutation probability must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(TimegenError::Configuration(
                "Elite fraction must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation_cap, 300);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.early_stop_threshold, 90);
        assert_eq!(config.breeding_pool_size, 10);
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        let mut config = EvolutionConfig::default();
        config.population_size = 1;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.mutation_probability = 1.5;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.elite_fraction = -0.1;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.breeding_pool_size = 0;
        assert!(config.validate().is_err());
    }
}
