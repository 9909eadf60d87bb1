//! # Statistics Crate
//!
//! The `stats` crate provides the statistical machinery used to decide
//! whether a motif candidate is over-represented: descriptive statistics,
//! joint ranking of two samples with tie tracking, the tie-corrected
//! Mann-Whitney U test, and the kurtosis-based "thinness" heuristic used as
//! a secondary outlier filter.

pub mod descriptive;
pub mod errors;
pub mod mann_whitney;
pub mod rank;
pub mod thinness;

pub use descriptive::{mean, mean_std, standard_deviation};
pub use errors::StatsError;
pub use mann_whitney::{MannWhitney, MannWhitneyStatistic};
pub use rank::{rank, rank_samples, RankedSamples};
pub use thinness::{kurtosis_distance, thinness};
