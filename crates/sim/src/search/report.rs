//! Run-time reporting.
//!
//! The engine never logs. Discoveries, culls and per-generation summaries are
//! handed to a [`SearchObserver`] supplied by the caller.

use super::{Individual, KillReason};
use crate::base::Sequence;
use serde::Serialize;

/// A candidate that passed every reporting criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discovery {
    /// Generation in which the report was made
    pub generation: usize,
    /// Anchor in the shuffled background as laid out at report time. The
    /// layout is redrawn at the next refresh, after which this offset no
    /// longer points at `motif`.
    pub position: usize,
    /// The candidate's own motif
    pub motif: Sequence,
    /// Consensus of all near-matches in the input, both strands
    pub consensus: Sequence,
    /// Number of near-matches behind the consensus
    pub occurrences: usize,
    /// Mann-Whitney score at report time
    pub probability: f64,
    pub fitness: f64,
}

/// Counts describing one finished generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    pub generation: usize,
    /// Population size after breeding
    pub population: usize,
    pub killed: usize,
    pub discoveries: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
}

/// Totals for a complete run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub generations: usize,
    pub discoveries: usize,
    pub killed: usize,
    pub final_population: usize,
}

/// Receives search events.
///
/// Only discoveries must be handled; culls and generation summaries default
/// to no-ops.
pub trait SearchObserver {
    fn on_discovery(&mut self, discovery: &Discovery);

    fn on_cull(&mut self, _generation: usize, _individual: &Individual, _reason: KillReason) {}

    fn on_generation(&mut self, _summary: &GenerationSummary) {}
}

/// Ignores every event.
impl SearchObserver for () {
    fn on_discovery(&mut self, _discovery: &Discovery) {}
}

/// Collects discoveries.
impl SearchObserver for Vec<Discovery> {
    fn on_discovery(&mut self, discovery: &Discovery) {
        self.push(discovery.clone());
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_discovery(&mut self, discovery: &Discovery) {
        (**self).on_discovery(discovery);
    }

    fn on_cull(&mut self, generation: usize, individual: &Individual, reason: KillReason) {
        (**self).on_cull(generation, individual, reason);
    }

    fn on_generation(&mut self, summary: &GenerationSummary) {
        (**self).on_generation(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery() -> Discovery {
        Discovery {
            generation: 12,
            position: 40,
            motif: "GATTACCA".parse().unwrap(),
            consensus: "GATTMCCA".parse().unwrap(),
            occurrences: 9,
            probability: 0.004,
            fitness: 31.0,
        }
    }

    #[test]
    fn test_vec_collects_discoveries() {
        let mut seen: Vec<Discovery> = Vec::new();
        seen.on_discovery(&discovery());
        seen.on_generation(&GenerationSummary {
            generation: 1,
            population: 10,
            killed: 0,
            discoveries: 1,
            best_fitness: 0.0,
            mean_fitness: 0.0,
        });
        assert_eq!(seen, vec![discovery()]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn feed<O: SearchObserver>(mut observer: O) {
            observer.on_discovery(&discovery());
        }
        let mut seen: Vec<Discovery> = Vec::new();
        feed(&mut seen);
        feed(&mut seen);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_discovery_serializes_sequences_as_text() {
        let json = serde_json::to_value(discovery()).unwrap();
        assert_eq!(json["motif"], "GATTACCA");
        assert_eq!(json["consensus"], "GATTMCCA");
        assert_eq!(json["occurrences"], 9);
    }
}
