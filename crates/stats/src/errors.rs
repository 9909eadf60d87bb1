use thiserror::Error;

/// Error type for statistical computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A test was given an empty sample.
    #[error("Empty sample: the {0} sample contains no observations")]
    EmptySample(&'static str),
}
