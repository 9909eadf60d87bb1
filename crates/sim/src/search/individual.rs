//! Candidate motifs.

use crate::base::Sequence;
use motevo_stats::MannWhitney;
use rand::Rng;
use std::fmt;

/// One candidate motif anchored in the shuffled background.
///
/// Every evaluation records a paired observation: how often the motif occurs
/// (up to the mismatch tolerance, both strands) in a background chunk, and how
/// often a random shuffle of the motif occurs in the same chunk. The two
/// sample lists always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    position: usize,
    parent: Option<usize>,
    motif: Sequence,
    real: Vec<f64>,
    shuffled: Vec<f64>,
    alive: bool,
    fitness: f64,
}

impl Individual {
    /// Paired samples needed before `mw_score` reports a probability.
    pub const MIN_SAMPLES: usize = 5;

    /// Score returned while fewer than [`Self::MIN_SAMPLES`] samples exist.
    pub const INSUFFICIENT: f64 = -1.0;

    /// Create an individual at `position` carrying `motif`.
    pub fn new(position: usize, motif: Sequence) -> Self {
        Self {
            position,
            parent: None,
            motif,
            real: Vec::new(),
            shuffled: Vec::new(),
            alive: true,
            fitness: 0.0,
        }
    }

    /// Record the anchor of the parent this individual was bred from.
    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn motif(&self) -> &Sequence {
        &self.motif
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.motif.len()
    }

    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Number of generations this individual has been evaluated.
    #[inline]
    pub fn alive_for(&self) -> usize {
        self.real.len()
    }

    /// Recorded `(real, shuffled)` occurrence counts.
    pub fn samples(&self) -> (&[f64], &[f64]) {
        (&self.real, &self.shuffled)
    }

    /// Count the motif and a fresh shuffle of it in `background` and add the
    /// difference to the fitness.
    pub fn evaluate<R: Rng + ?Sized>(
        &mut self,
        background: &Sequence,
        tolerance: usize,
        rng: &mut R,
    ) {
        let control = self.motif.shuffle(rng);

        let real = background.count_similar(&self.motif, tolerance) as f64;
        let shuffled = background.count_similar(&control, tolerance) as f64;

        self.real.push(real);
        self.shuffled.push(shuffled);
        self.fitness += real - shuffled;
    }

    /// Clear the fitness accumulator. Sample history is kept.
    pub fn reset(&mut self) {
        self.fitness = 0.0;
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Probability that the real and shuffled counts come from the same
    /// distribution.
    ///
    /// Returns [`Self::INSUFFICIENT`] with fewer than [`Self::MIN_SAMPLES`]
    /// samples unless `force` is set, `1.0` when the motif was never seen and
    /// `0.05` when only the real motif was seen.
    pub fn mw_score(&self, force: bool) -> f64 {
        if self.alive_for() < Self::MIN_SAMPLES && !force {
            return Self::INSUFFICIENT;
        }
        if self.real.iter().sum::<f64>() == 0.0 {
            return 1.0;
        }
        if self.shuffled.iter().sum::<f64>() == 0.0 {
            return 0.05;
        }
        match MannWhitney::new(self.real.clone(), self.shuffled.clone()) {
            Ok(mut test) => test.p_value(),
            Err(_) => Self::INSUFFICIENT,
        }
    }
}

#[cfg(test)]
impl Individual {
    /// Replace the sample history; fitness becomes the summed differences.
    pub(crate) fn with_history(mut self, real: &[f64], shuffled: &[f64]) -> Self {
        assert_eq!(real.len(), shuffled.len());
        self.real = real.to_vec();
        self.shuffled = shuffled.to_vec();
        self.fitness = real.iter().zip(shuffled).map(|(r, s)| r - s).sum();
        self
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.motif, self.position)?;
        if let Some(parent) = self.parent {
            write!(f, " (parent {parent})")?;
        }
        write!(f, " survived {} fitness {}", self.alive_for(), self.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn with_samples(real: &[f64], shuffled: &[f64]) -> Individual {
        Individual::new(0, seq("ACGT")).with_history(real, shuffled)
    }

    #[test]
    fn test_new_individual() {
        let ind = Individual::new(12, seq("ACGTAC"));
        assert_eq!(ind.position(), 12);
        assert_eq!(ind.size(), 6);
        assert_eq!(ind.parent(), None);
        assert!(ind.is_alive());
        assert_eq!(ind.alive_for(), 0);
        assert_eq!(ind.fitness(), 0.0);
    }

    #[test]
    fn test_with_parent() {
        let ind = Individual::new(3, seq("AC")).with_parent(40);
        assert_eq!(ind.parent(), Some(40));
        assert_eq!(ind.to_string(), "AC @ 3 (parent 40) survived 0 fitness 0");
    }

    #[test]
    fn test_evaluate_records_paired_samples() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let background = seq("GGGGAAACCCGGGGAAACCCGGGG");
        let mut ind = Individual::new(4, seq("AAACCC"));

        ind.evaluate(&background, 0, &mut rng);
        ind.evaluate(&background, 0, &mut rng);

        let (real, shuffled) = ind.samples();
        assert_eq!(real, &[2.0, 2.0]);
        assert_eq!(shuffled.len(), 2);
        assert_eq!(ind.alive_for(), 2);
        let expected: f64 = real.iter().zip(shuffled).map(|(r, s)| r - s).sum();
        assert_eq!(ind.fitness(), expected);
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let background = seq("ACGTACGTACGT");
        let mut ind = Individual::new(0, seq("ACGT"));
        ind.evaluate(&background, 0, &mut rng);
        ind.fitness = 7.0;
        ind.reset();
        assert_eq!(ind.fitness(), 0.0);
        assert_eq!(ind.alive_for(), 1);
    }

    #[test]
    fn test_kill_is_one_way() {
        let mut ind = Individual::new(0, seq("ACGT"));
        ind.kill();
        assert!(!ind.is_alive());
        ind.reset();
        assert!(!ind.is_alive());
    }

    #[test]
    fn test_mw_score_needs_five_samples() {
        let ind = with_samples(&[3.0, 4.0, 5.0, 6.0], &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(ind.mw_score(false), -1.0);
        assert!(ind.mw_score(true) >= 0.0);

        let ind = with_samples(&[3.0, 4.0, 5.0, 6.0, 7.0], &[1.0, 1.0, 1.0, 1.0, 1.0]);
        let score = ind.mw_score(false);
        assert!(score > 0.0 && score < 0.05);
    }

    #[test]
    fn test_mw_score_no_real_signal() {
        let ind = with_samples(&[0.0; 5], &[2.0, 0.0, 1.0, 0.0, 3.0]);
        assert_eq!(ind.mw_score(false), 1.0);
        let ind = with_samples(&[], &[]);
        assert_eq!(ind.mw_score(true), 1.0);
    }

    #[test]
    fn test_mw_score_no_shuffled_signal() {
        let ind = with_samples(&[1.0, 0.0, 2.0, 1.0, 1.0], &[0.0; 5]);
        assert_eq!(ind.mw_score(false), 0.05);
    }

    #[test]
    fn test_mw_score_indistinguishable() {
        let ind = with_samples(&[2.0, 3.0, 4.0, 2.0, 3.0], &[3.0, 2.0, 4.0, 3.0, 2.0]);
        assert!(ind.mw_score(false) >= 0.4);
    }
}
