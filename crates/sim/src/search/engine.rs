//! Search engine.
//!
//! Drives the generational loop: decimate, breed, rotate the background chunk
//! and evaluate.

use super::{
    decimate, Background, Discovery, GenerationSummary, Individual, Population, RunSummary,
    SearchConfig, SearchObserver, Verdict,
};
use crate::base::Sequence;
use crate::errors::SearchError;
use crate::random;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::cmp::Ordering;

/// Genetic motif search over a set of input sequences.
///
/// One instance owns the background, the population and the random number
/// generator; every stochastic step draws from that generator, so a seeded
/// configuration reproduces a run exactly.
///
/// # Examples
///
/// ```
/// use motevo_sim::base::Sequence;
/// use motevo_sim::search::{Discovery, MotifSearch, SearchConfig};
///
/// let input: Vec<Sequence> = vec!["ACGTTGCAACGTAGGCTTACGGATCCATGCATGCAAGGTT".parse().unwrap()];
/// let config = SearchConfig {
///     motif_size: 6,
///     chunk_size: 40,
///     population_size: 5,
///     generations: 3,
///     tolerance: 1,
///     seed: Some(42),
///     ..Default::default()
/// };
///
/// let mut search = MotifSearch::new(config, input).unwrap();
/// let mut found: Vec<Discovery> = Vec::new();
/// let summary = search.run(&mut found).unwrap();
/// assert_eq!(summary.generations, 3);
/// assert_eq!(search.population().len(), 5);
/// ```
#[derive(Debug)]
pub struct MotifSearch {
    config: SearchConfig,
    background: Background,
    population: Population,
    generation: usize,
    rng: Xoshiro256PlusPlus,
}

impl MotifSearch {
    /// Validate `config`, then shuffle the input into a fresh background.
    pub fn new(config: SearchConfig, sequences: Vec<Sequence>) -> Result<Self, SearchError> {
        config.validate()?;
        if sequences.is_empty() {
            return Err(SearchError::MissingRequired("sequences"));
        }
        let total: usize = sequences.iter().map(Sequence::len).sum();
        if total < config.motif_size {
            return Err(SearchError::InvalidParameter(format!(
                "input holds {total} bases, fewer than motif_size ({})",
                config.motif_size
            )));
        }

        let mut rng = random::rng_from_seed(config.seed);
        let mut background = Background::new(sequences, config.chunk_size, config.motif_size);
        background.refresh(&mut rng);

        Ok(Self {
            population: Population::with_capacity(config.population_size),
            config,
            background,
            generation: 0,
            rng,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Reshuffle the background. Existing individuals keep their motifs.
    pub fn refresh(&mut self) {
        self.background.refresh(&mut self.rng);
    }

    fn free_positions(&self) -> Vec<usize> {
        self.background
            .valid_positions()
            .iter()
            .copied()
            .filter(|&pos| !self.population.is_claimed(pos))
            .collect()
    }

    /// Add `count` individuals at distinct, uniformly random free anchors.
    pub fn init_population(&mut self, count: usize) -> Result<(), SearchError> {
        let mut free = self.free_positions();
        if free.len() < count {
            return Err(SearchError::InsufficientPositions {
                requested: count,
                available: free.len(),
            });
        }

        let chosen = random::permutation(&mut self.rng, &mut free, count);
        for &pos in chosen.iter() {
            let individual = Individual::new(pos, self.background.window(pos));
            self.population.insert(individual);
        }
        Ok(())
    }

    /// Add an individual at a chosen anchor.
    pub fn plant(&mut self, position: usize) -> Result<(), SearchError> {
        if !self.background.is_valid_position(position) {
            return Err(SearchError::InvalidParameter(format!(
                "position {position} is not a valid anchor"
            )));
        }
        let individual = Individual::new(position, self.background.window(position));
        if !self.population.insert(individual) {
            return Err(SearchError::InvalidParameter(format!(
                "position {position} is already claimed"
            )));
        }
        Ok(())
    }

    /// Evaluate every individual against the chunk of the current generation.
    pub fn evaluate_population(&mut self) {
        let chunk = self.background.chunk(self.generation);
        let tolerance = self.config.tolerance;
        for individual in self.population.iter_mut() {
            individual.evaluate(chunk, tolerance, &mut self.rng);
        }
    }

    /// Fill the population back to its target size. Returns the number of
    /// individuals added.
    pub fn breed(&mut self) -> Result<usize, SearchError> {
        let mut born = 0;
        while self.population.len() < self.config.population_size {
            if self.population.is_empty() {
                self.init_population(1)?;
                born += 1;
                continue;
            }

            let (child, parent) = self.crossover();
            let position = self.place(&child)?;
            let offspring =
                Individual::new(position, self.background.window(position)).with_parent(parent);
            if !self.population.insert(offspring) {
                return Err(SearchError::PlacementExhausted {
                    motif: child.to_string(),
                });
            }
            born += 1;
        }
        Ok(born)
    }

    /// One-point crossover of two parents drawn with replacement. Returns the
    /// child motif and the first parent's anchor.
    fn crossover(&mut self) -> (Sequence, usize) {
        let n = self.population.len();
        let first = random::uniform_index(&mut self.rng, n);
        let second = random::uniform_index(&mut self.rng, n);
        let cut = self.rng.random_range(1..self.config.motif_size);

        let individuals = self.population.individuals();
        let (mother, father) = (&individuals[first], &individuals[second]);
        let child = mother
            .motif()
            .iter()
            .take(cut)
            .chain(father.motif().iter().skip(cut))
            .collect();
        (child, mother.position())
    }

    /// Anchor for a child motif.
    ///
    /// Free windows with the fewest mismatches win, which is where a search
    /// with a tolerance growing from zero first succeeds. One of them is drawn
    /// at random and, with `mutation_probability`, moved to a free anchor
    /// within one motif width.
    fn place(&mut self, motif: &Sequence) -> Result<usize, SearchError> {
        let mut best = usize::MAX;
        let mut candidates = Vec::new();
        for &pos in self.background.valid_positions() {
            if self.population.is_claimed(pos) {
                continue;
            }
            let distance = self.background.distance_at(pos, motif);
            match distance.cmp(&best) {
                Ordering::Less => {
                    best = distance;
                    candidates.clear();
                    candidates.push(pos);
                }
                Ordering::Equal => candidates.push(pos),
                Ordering::Greater => {}
            }
        }

        let Some(&position) = candidates.choose(&mut self.rng) else {
            return Err(SearchError::PlacementExhausted {
                motif: motif.to_string(),
            });
        };
        if random::uniform(&mut self.rng) < self.config.mutation_probability {
            return Ok(self.relocate(position));
        }
        Ok(position)
    }

    fn relocate(&mut self, position: usize) -> usize {
        let width = self.config.motif_size;
        let nearby: Vec<usize> = (position.saturating_sub(width)..=position + width)
            .filter(|&pos| {
                pos != position
                    && self.background.is_valid_position(pos)
                    && !self.population.is_claimed(pos)
            })
            .collect();
        nearby.choose(&mut self.rng).copied().unwrap_or(position)
    }

    fn discovery(&self, individual: &Individual, probability: f64) -> Discovery {
        let windows = self
            .background
            .occurrences(individual.motif(), self.config.tolerance);
        Discovery {
            generation: self.generation,
            position: individual.position(),
            motif: individual.motif().clone(),
            consensus: Sequence::find_consensus(&windows),
            occurrences: windows.len(),
            probability,
            fitness: individual.fitness(),
        }
    }

    /// Advance one generation.
    ///
    /// Sorts by fitness, decimates (reporting discoveries and culls to
    /// `observer`), sweeps the dead, breeds back to size and evaluates against
    /// the next chunk. When the chunk index wraps the background is
    /// reshuffled and fitness is reset before evaluation.
    pub fn step<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<GenerationSummary, SearchError> {
        self.generation += 1;
        let generation = self.generation;

        self.population.sort_by_fitness();
        let verdicts = decimate(self.population.individuals(), &self.config);

        let mut killed = 0;
        let mut discoveries = 0;
        for (idx, verdict) in verdicts.into_iter().enumerate() {
            match verdict {
                Verdict::Survive => {}
                Verdict::Kill(reason) => {
                    if let Some(individual) = self.population.get_mut(idx) {
                        individual.kill();
                        observer.on_cull(generation, individual, reason);
                        killed += 1;
                    }
                }
                Verdict::Report { probability } => {
                    if let Some(individual) = self.population.get(idx) {
                        let discovery = self.discovery(individual, probability);
                        observer.on_discovery(&discovery);
                        discoveries += 1;
                    }
                }
            }
        }

        self.population.sweep();
        self.breed()?;

        if generation % self.background.chunk_count() == 0 {
            self.refresh();
            self.population.reset_fitness();
        }
        self.evaluate_population();

        let (best_fitness, mean_fitness) = self.population.fitness_stats().unwrap_or((0.0, 0.0));
        let summary = GenerationSummary {
            generation,
            population: self.population.len(),
            killed,
            discoveries,
            best_fitness,
            mean_fitness,
        };
        observer.on_generation(&summary);
        Ok(summary)
    }

    /// Fill the population, evaluate it and run `generations` steps.
    ///
    /// Individuals planted beforehand count towards the population size.
    pub fn run<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<RunSummary, SearchError> {
        let missing = self
            .config
            .population_size
            .saturating_sub(self.population.len());
        self.init_population(missing)?;
        self.evaluate_population();

        let mut total = RunSummary {
            generations: 0,
            discoveries: 0,
            killed: 0,
            final_population: 0,
        };
        for _ in 0..self.config.generations {
            let summary = self.step(observer)?;
            total.generations += 1;
            total.discoveries += summary.discoveries;
            total.killed += summary.killed;
        }
        total.final_population = self.population.len();
        Ok(total)
    }
}
