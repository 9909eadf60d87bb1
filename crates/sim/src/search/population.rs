//! Population management.
//!
//! A population is the set of live candidates plus the anchor positions they
//! claim in the shuffled background. No two members share a position.

use super::Individual;
use std::collections::HashSet;

/// Collection of individuals with unique anchor positions.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    claimed: HashSet<usize>,
}

impl Population {
    /// Create an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            claimed: HashSet::with_capacity(capacity),
        }
    }

    /// Get the number of individuals.
    #[inline]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get individual by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Individual> {
        self.individuals.get_mut(index)
    }

    #[inline]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Individual> {
        self.individuals.iter_mut()
    }

    /// Find the individual anchored at `position`.
    pub fn find(&self, position: usize) -> Option<&Individual> {
        self.individuals.iter().find(|ind| ind.position() == position)
    }

    /// Return `true` if a member is anchored at `position`.
    #[inline]
    pub fn is_claimed(&self, position: usize) -> bool {
        self.claimed.contains(&position)
    }

    /// Add `individual` and claim its position.
    ///
    /// Returns `false`, leaving the population unchanged, when the position is
    /// already claimed.
    pub fn insert(&mut self, individual: Individual) -> bool {
        if !self.claimed.insert(individual.position()) {
            return false;
        }
        self.individuals.push(individual);
        true
    }

    /// Sort ascending by fitness.
    pub fn sort_by_fitness(&mut self) {
        self.individuals
            .sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
    }

    /// Fitness of every member, in population order.
    pub fn fitnesses(&self) -> Vec<f64> {
        self.individuals.iter().map(Individual::fitness).collect()
    }

    /// Remove dead individuals and release their positions.
    pub fn sweep(&mut self) -> Vec<Individual> {
        let (alive, dead): (Vec<_>, Vec<_>) = std::mem::take(&mut self.individuals)
            .into_iter()
            .partition(Individual::is_alive);
        for ind in &dead {
            self.claimed.remove(&ind.position());
        }
        self.individuals = alive;
        dead
    }

    /// Clear the fitness accumulator of every member.
    pub fn reset_fitness(&mut self) {
        for ind in &mut self.individuals {
            ind.reset();
        }
    }

    /// Highest and mean fitness, `None` when empty.
    pub fn fitness_stats(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let fitnesses = self.fitnesses();
        let best = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((best, motevo_stats::mean(&fitnesses)))
    }
}
