//! Joint ranking of two samples.
//!
//! Both samples are pooled, sorted ascending, and assigned ranks `1..=N`.
//! Runs of equal values share the mean rank of the run. The length of every
//! run (including runs of length one) is recorded in sorted order so that
//! tie corrections can be computed afterwards.

use std::cmp::Ordering;

/// Ranks of two pooled samples plus the tie-run lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSamples {
    /// Ranks of the first sample, in sorted-value order.
    pub first: Vec<f64>,
    /// Ranks of the second sample, in sorted-value order.
    pub second: Vec<f64>,
    /// Length of each run of equal values, one entry per distinct value.
    pub ties: Vec<usize>,
}

impl RankedSamples {
    /// Sum of the ranks assigned to the first sample.
    pub fn first_rank_sum(&self) -> f64 {
        self.first.iter().sum()
    }

    /// Sum of the ranks assigned to the second sample.
    pub fn second_rank_sum(&self) -> f64 {
        self.second.iter().sum()
    }

    /// Total number of pooled observations.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Return `true` if both samples were empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Origin {
    First,
    Second,
}

/// Rank the pooled values of `first` and `second`.
///
/// NaN values compare as equal to each other and greater than any number.
pub fn rank_samples(first: &[f64], second: &[f64]) -> RankedSamples {
    let mut pooled: Vec<(f64, Origin)> = first
        .iter()
        .map(|&v| (v, Origin::First))
        .chain(second.iter().map(|&v| (v, Origin::Second)))
        .collect();
    pooled.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or_else(|| nan_last(a.0, b.0)));

    let mut ranked = RankedSamples {
        first: Vec::with_capacity(first.len()),
        second: Vec::with_capacity(second.len()),
        ties: Vec::new(),
    };

    let mut i = 0;
    while i < pooled.len() {
        let mut run = 1;
        while i + run < pooled.len() && same_value(pooled[i + run].0, pooled[i].0) {
            run += 1;
        }

        // Ranks i+1 ..= i+run, averaged.
        let mean_rank = (2 * i + run + 1) as f64 / 2.0;
        for &(_, origin) in &pooled[i..i + run] {
            match origin {
                Origin::First => ranked.first.push(mean_rank),
                Origin::Second => ranked.second.push(mean_rank),
            }
        }
        ranked.ties.push(run);
        i += run;
    }

    ranked
}

/// Rank a single sample.
pub fn rank(values: &[f64]) -> Vec<f64> {
    rank_samples(values, &[]).first
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        _ => Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_distinct() {
        assert_eq!(rank(&[30.0, 10.0, 20.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rank_samples_interleaved() {
        let ranked = rank_samples(&[1.0, 3.0, 5.0], &[2.0, 4.0, 6.0]);
        assert_eq!(ranked.first, vec![1.0, 3.0, 5.0]);
        assert_eq!(ranked.second, vec![2.0, 4.0, 6.0]);
        assert_eq!(ranked.ties, vec![1; 6]);
        assert_eq!(ranked.len(), 6);
    }

    #[test]
    fn test_rank_samples_ties_share_mean_rank() {
        let ranked = rank_samples(&[1.0, 2.0, 2.0], &[2.0, 5.0]);
        // 1 -> 1, the three 2s share ranks 2,3,4 -> 3, 5 -> 5
        assert_eq!(ranked.first, vec![1.0, 3.0, 3.0]);
        assert_eq!(ranked.second, vec![3.0, 5.0]);
        assert_eq!(ranked.ties, vec![1, 3, 1]);
        assert!((ranked.first_rank_sum() + ranked.second_rank_sum() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_samples_all_tied() {
        let ranked = rank_samples(&[4.0, 4.0], &[4.0, 4.0]);
        assert_eq!(ranked.first, vec![2.5, 2.5]);
        assert_eq!(ranked.second, vec![2.5, 2.5]);
        assert_eq!(ranked.ties, vec![4]);
    }

    #[test]
    fn test_rank_samples_empty() {
        let ranked = rank_samples(&[], &[]);
        assert!(ranked.is_empty());
        assert!(ranked.ties.is_empty());
    }
}
