//! Search parameters.

use crate::errors::SearchError;
use serde::{Deserialize, Serialize};

/// Every tunable of a motif search.
///
/// Missing fields take their default when deserialized, so a JSON file only
/// needs the values it changes:
///
/// ```
/// use motevo_sim::search::SearchConfig;
///
/// let config = SearchConfig::from_json(r#"{ "motif_size": 10, "seed": 7 }"#).unwrap();
/// assert_eq!(config.motif_size, 10);
/// assert_eq!(config.population_size, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Length of candidate motifs
    pub motif_size: usize,
    /// Length of the background chunk evaluated per generation
    pub chunk_size: usize,
    /// Target number of individuals
    pub population_size: usize,
    /// Number of generations after initialization
    pub generations: usize,
    /// Mismatches allowed when counting occurrences
    pub tolerance: usize,
    /// Individuals whose standardized fitness falls below this are killed
    pub fitness_floor: f64,
    /// Individuals with a score above this are killed
    pub max_score: f64,
    /// Age (in evaluations) at which a candidate may be reported
    pub report_age: usize,
    /// Minimum thinness for a report
    pub thinness_threshold: f64,
    /// Chance that an offspring is moved next to its matched position
    pub mutation_probability: f64,
    /// RNG seed, `None` for entropy
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            motif_size: 8,
            chunk_size: 300,
            population_size: 100,
            generations: 100,
            tolerance: 2,
            fitness_floor: -1.0,
            max_score: 0.1,
            report_age: 10,
            thinness_threshold: 0.0,
            mutation_probability: 0.1,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| SearchError::InvalidParameter(format!("malformed configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.motif_size < 2 {
            return Err(invalid(format!(
                "motif_size must be at least 2, got {}",
                self.motif_size
            )));
        }
        if self.chunk_size < self.motif_size {
            return Err(invalid(format!(
                "chunk_size ({}) must be at least motif_size ({})",
                self.chunk_size, self.motif_size
            )));
        }
        if self.population_size == 0 {
            return Err(invalid("population_size must be positive".to_string()));
        }
        if self.report_age == 0 {
            return Err(invalid("report_age must be positive".to_string()));
        }
        if self.tolerance >= self.motif_size {
            return Err(invalid(format!(
                "tolerance ({}) must be below motif_size ({})",
                self.tolerance, self.motif_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(invalid(format!(
                "mutation_probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if !(self.max_score.is_finite() && self.max_score > 0.0) {
            return Err(invalid(format!(
                "max_score must be positive, got {}",
                self.max_score
            )));
        }
        if self.fitness_floor.is_nan() || self.thinness_threshold.is_nan() {
            return Err(invalid("thresholds must be numbers".to_string()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SearchError {
    SearchError::InvalidParameter(msg)
}
