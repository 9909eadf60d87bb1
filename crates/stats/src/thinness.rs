//! Kurtosis-based outlier heuristic.
//!
//! A population of scores is turned into a histogram (how many members share
//! each score). The "kurtosis distance" of a value measures how atypical the
//! number of members sharing that value is compared to the other histogram
//! bins; "thinness" rescales it by the standard error of kurtosis for a
//! population of that size. This is a filter heuristic, not a formal test.
//!
//! Scores are bucketed to the nearest integer when building the histogram.

use crate::descriptive::mean_std;
use std::collections::BTreeMap;

fn histogram(population: &[f64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &value in population {
        *counts.entry(bucket(value)).or_insert(0) += 1;
    }
    counts
}

#[inline]
fn bucket(value: f64) -> i64 {
    value.round() as i64
}

/// Distance of `value`'s bin count to the kurtosis of the bin counts.
///
/// Returns `0.0` when the bin counts have no spread (or the population has
/// fewer than two members).
pub fn kurtosis_distance(value: f64, population: &[f64]) -> f64 {
    let counts = histogram(population);
    let bins: Vec<f64> = counts.values().map(|&c| c as f64).collect();
    let (bin_mean, bin_sd) = mean_std(&bins);

    let n = population.len() as f64;
    let denominator = (n - 1.0) * bin_sd.powi(4);
    if !(denominator.is_finite() && denominator > 0.0) {
        return 0.0;
    }

    let own = counts.get(&bucket(value)).copied().unwrap_or(0) as f64;
    (own - bin_mean).powi(4) * n / denominator - 3.0
}

/// Thinness of `value` relative to `population`.
///
/// Higher values flag scores whose frequency is unusual for the population.
/// An empty population has a thinness of `0.0`.
pub fn thinness(value: f64, population: &[f64]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let std_error = 2.0 * (6.0 / population.len() as f64).sqrt();
    (kurtosis_distance(value, population) + 2.0 * std_error) / (4.0 + std_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_buckets_to_nearest_integer() {
        let counts = histogram(&[1.0, 1.2, 0.9, 3.0, -2.4]);
        assert_eq!(counts.get(&1), Some(&3));
        assert_eq!(counts.get(&3), Some(&1));
        assert_eq!(counts.get(&-2), Some(&1));
    }

    #[test]
    fn test_uniform_histogram_has_zero_distance() {
        // Every value appears once: no spread in bin counts.
        let population = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(kurtosis_distance(3.0, &population), 0.0);
    }

    #[test]
    fn test_crowded_bin_is_far_from_kurtosis() {
        // Bins: {1: 1, 2: 1, 3: 1, 7: 5}; mean count 2.
        let population = [1.0, 2.0, 3.0, 7.0, 7.0, 7.0, 7.0, 7.0];
        let common = kurtosis_distance(7.0, &population);
        let rare = kurtosis_distance(1.0, &population);
        assert!(common > rare);
        assert!(rare >= -3.0);
    }

    #[test]
    fn test_thinness_of_uniform_population_is_positive() {
        let population: Vec<f64> = (0..50).map(f64::from).collect();
        let se = 2.0 * (6.0_f64 / 50.0).sqrt();
        let expected = 2.0 * se / (4.0 + se);
        assert!((thinness(10.0, &population) - expected).abs() < 1e-12);
        assert!(thinness(10.0, &population) > 0.0);
    }

    #[test]
    fn test_thinness_empty_population() {
        assert_eq!(thinness(1.0, &[]), 0.0);
    }

    #[test]
    fn test_thinness_lower_bound() {
        let population = [1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 5.0, 5.0];
        let se = 2.0 * (6.0_f64 / 8.0).sqrt();
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            assert!(thinness(value, &population) >= (-3.0 + 2.0 * se) / (4.0 + se) - 1e-12);
        }
    }
}
