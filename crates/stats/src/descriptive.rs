//! Descriptive statistics over slices of observations.
//!
//! Standard deviations are population (biased) estimates, dividing by `n`
//! rather than `n - 1`. Empty inputs yield `NaN`.

use statrs::statistics::Statistics;

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Population standard deviation of `values`.
pub fn standard_deviation(values: &[f64]) -> f64 {
    values.iter().population_std_dev()
}

/// Mean and population standard deviation of `values`, in that order.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    (mean(values), standard_deviation(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_standard_deviation_is_population_estimate() {
        // Var = ((-1.5)^2 + (-0.5)^2 + 0.5^2 + 1.5^2) / 4 = 1.25
        let sd = standard_deviation(&[1.0, 2.0, 3.0, 4.0]);
        assert!((sd - 1.25_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_std_constant() {
        let (m, sd) = mean_std(&[7.0, 7.0, 7.0]);
        assert!((m - 7.0).abs() < 1e-12);
        assert!(sd.abs() < 1e-12);
    }

    #[test]
    fn test_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(standard_deviation(&[]).is_nan());
    }
}
