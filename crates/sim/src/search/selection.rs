//! Culling decisions.
//!
//! `decimate` only decides; the engine applies the verdicts, kills
//! individuals and emits reports.

use super::{Individual, SearchConfig};
use motevo_stats::{mean_std, thinness};
use serde::Serialize;
use std::fmt;

/// Why an individual was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KillReason {
    /// Standardized fitness fell below the floor.
    LowFitness,
    /// Mann-Whitney score exceeded the maximum.
    NotSignificant,
}

impl fmt::Display for KillReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowFitness => write!(f, "low fitness"),
            Self::NotSignificant => write!(f, "not significant"),
        }
    }
}

/// Outcome of one decimation pass for one individual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Survive,
    Kill(KillReason),
    /// Survives and is reported as a discovery with this score.
    Report { probability: f64 },
}

/// Decide the fate of every individual, in population order.
///
/// Fitness is standardized against the population; individuals below
/// `fitness_floor` die. Individuals with a score die if it exceeds
/// `max_score`. An individual exactly `report_age` evaluations old, scoring
/// below half of `max_score` and thinner than `thinness_threshold` is
/// reported.
pub fn decimate(population: &[Individual], config: &SearchConfig) -> Vec<Verdict> {
    let fitnesses: Vec<f64> = population.iter().map(Individual::fitness).collect();
    let (mean, std) = mean_std(&fitnesses);

    population
        .iter()
        .map(|ind| {
            let z = if std > 0.0 { (ind.fitness() - mean) / std } else { 0.0 };
            if z < config.fitness_floor {
                return Verdict::Kill(KillReason::LowFitness);
            }

            let score = ind.mw_score(false);
            if score < 0.0 {
                return Verdict::Survive;
            }
            if score > config.max_score {
                return Verdict::Kill(KillReason::NotSignificant);
            }
            if ind.alive_for() == config.report_age
                && score < config.max_score / 2.0
                && thinness(ind.fitness(), &fitnesses) > config.thinness_threshold
            {
                return Verdict::Report { probability: score };
            }
            Verdict::Survive
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(real: &[f64], shuffled: &[f64]) -> Individual {
        Individual::new(0, "ACGT".parse().unwrap()).with_history(real, shuffled)
    }

    fn config() -> SearchConfig {
        SearchConfig {
            motif_size: 4,
            tolerance: 0,
            report_age: 5,
            max_score: 0.2,
            thinness_threshold: -1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_young_equal_population_survives() {
        let pop = vec![individual(&[1.0], &[1.0]), individual(&[2.0], &[2.0])];
        assert_eq!(decimate(&pop, &config()), vec![Verdict::Survive, Verdict::Survive]);
    }

    #[test]
    fn test_low_fitness_is_killed() {
        let strong = individual(&[4.0, 4.0], &[1.0, 1.0]);
        let weak = individual(&[1.0, 1.0], &[1.0, 1.0]);
        // fitness 0, 6, 6, 6: the weak one sits sqrt(3) deviations below the mean
        let pop = vec![weak, strong.clone(), strong.clone(), strong];
        let verdicts = decimate(&pop, &config());
        assert_eq!(verdicts[0], Verdict::Kill(KillReason::LowFitness));
        assert!(verdicts[1..].iter().all(|v| *v == Verdict::Survive));
    }

    #[test]
    fn test_floor_can_be_disabled() {
        let strong = individual(&[4.0, 4.0], &[1.0, 1.0]);
        let weak = individual(&[1.0, 1.0], &[1.0, 1.0]);
        let config = SearchConfig { fitness_floor: f64::NEG_INFINITY, ..config() };
        let verdicts = decimate(&[weak, strong.clone(), strong], &config);
        assert!(verdicts.iter().all(|v| *v == Verdict::Survive));
    }

    #[test]
    fn test_insignificant_is_killed() {
        let flat = individual(&[2.0, 3.0, 2.0, 3.0, 2.0], &[3.0, 2.0, 3.0, 2.0, 2.0]);
        assert_eq!(decimate(&[flat], &config()), vec![Verdict::Kill(KillReason::NotSignificant)]);
    }

    #[test]
    fn test_significant_at_report_age_is_reported() {
        let ind = individual(&[9.0, 8.0, 9.0, 10.0, 9.0], &[2.0, 1.0, 3.0, 2.0, 0.0]);
        match decimate(&[ind], &config())[0] {
            Verdict::Report { probability } => assert!(probability < 0.01),
            other => panic!("expected a report, got {other:?}"),
        }
    }

    #[test]
    fn test_report_only_at_report_age() {
        let ind = individual(&[9.0, 8.0, 9.0, 10.0, 9.0, 9.0], &[2.0, 1.0, 3.0, 2.0, 0.0, 1.0]);
        assert_eq!(decimate(&[ind], &config()), vec![Verdict::Survive]);
    }

    #[test]
    fn test_report_needs_half_max_score() {
        // p lands between max_score / 2 and max_score
        let ind = individual(&[3.0, 4.0, 3.0, 4.0, 2.0], &[2.0, 3.0, 1.0, 4.0, 2.0]);
        let p = ind.mw_score(false);
        assert!(p > 0.1 && p <= 0.2, "p = {p}");
        assert_eq!(decimate(&[ind], &config()), vec![Verdict::Survive]);
    }

    #[test]
    fn test_thinness_threshold_blocks_report() {
        let ind = individual(&[9.0, 8.0, 9.0, 10.0, 9.0], &[2.0, 1.0, 3.0, 2.0, 0.0]);
        let config = SearchConfig { thinness_threshold: f64::INFINITY, ..config() };
        assert_eq!(decimate(&[ind], &config), vec![Verdict::Survive]);
    }

    #[test]
    fn test_empty_population() {
        assert!(decimate(&[], &config()).is_empty());
    }
}
