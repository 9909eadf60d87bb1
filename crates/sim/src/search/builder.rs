//! Builder pattern for creating motif searches.
//!
//! Provides a fluent API over [`SearchConfig`] with validation at `build`.

use super::{MotifSearch, SearchConfig};
use crate::base::Sequence;
use crate::errors::SearchError;
use crate::io;
use std::path::PathBuf;

#[derive(Debug, Clone)]
enum SequenceSource {
    Sequences(Vec<Sequence>),
    Fasta(PathBuf),
}

/// Builder for constructing `MotifSearch` instances with a fluent API.
///
/// # Examples
///
/// ```
/// use motevo_sim::base::Sequence;
/// use motevo_sim::search::SearchBuilder;
///
/// let input: Vec<Sequence> = vec!["ACGTTGCAACGTAGGCTTACGGATCCATGCATGCAAGGTT".parse().unwrap()];
/// let search = SearchBuilder::new()
///     .sequences(input)
///     .motif_size(6)
///     .chunk_size(20)
///     .population_size(10)
///     .tolerance(1)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(search.background().chunk_count(), 2);
/// ```
///
/// ```no_run
/// use motevo_sim::search::SearchBuilder;
///
/// // requires promoters.fa to exist
/// let search = SearchBuilder::new()
///     .fasta("promoters.fa")
///     .generations(500)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchBuilder {
    source: Option<SequenceSource>,
    config: SearchConfig,
}

impl SearchBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every parameter at once.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Search these sequences (required unless `fasta` is used).
    pub fn sequences(mut self, sequences: Vec<Sequence>) -> Self {
        self.source = Some(SequenceSource::Sequences(sequences));
        self
    }

    /// Read the sequences from a FASTA-style file at build time.
    pub fn fasta(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(SequenceSource::Fasta(path.into()));
        self
    }

    /// Set the motif length (default: 8).
    pub fn motif_size(mut self, size: usize) -> Self {
        self.config.motif_size = size;
        self
    }

    /// Set the background chunk length (default: 300).
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the population size (default: 100).
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the number of generations to run (default: 100).
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the mismatch tolerance (default: 2).
    pub fn tolerance(mut self, tolerance: usize) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the standardized fitness floor (default: -1.0).
    pub fn fitness_floor(mut self, floor: f64) -> Self {
        self.config.fitness_floor = floor;
        self
    }

    /// Set the maximum score (default: 0.1).
    pub fn max_score(mut self, score: f64) -> Self {
        self.config.max_score = score;
        self
    }

    /// Set the report age (default: 10).
    pub fn report_age(mut self, age: usize) -> Self {
        self.config.report_age = age;
        self
    }

    /// Set the thinness threshold (default: 0.0).
    pub fn thinness_threshold(mut self, threshold: f64) -> Self {
        self.config.thinness_threshold = threshold;
        self
    }

    /// Set the offspring relocation probability (default: 0.1).
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build and validate the search.
    pub fn build(self) -> Result<MotifSearch, SearchError> {
        self.config.validate()?;
        let sequences = match self.source {
            None => return Err(SearchError::MissingRequired("sequences")),
            Some(SequenceSource::Sequences(sequences)) => sequences,
            Some(SequenceSource::Fasta(path)) => io::read_fasta(&path).map_err(|e| {
                SearchError::SequenceImport(format!("{}: {e}", path.display()))
            })?,
        };
        MotifSearch::new(self.config, sequences)
    }
}
