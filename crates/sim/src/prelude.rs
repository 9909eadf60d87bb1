//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use motevo_sim::prelude::*;
//!
//! let seq: Sequence = "ACGTRY".parse().unwrap();
//! assert_eq!(seq.reverse_complement().to_string(), "RYACGT");
//! ```

pub use crate::base::{Base, BaseSet, Sequence};
pub use crate::errors::{InputError, InvalidBase, InvalidSequence, SearchError};
pub use crate::io::{parse_fasta, read_fasta};
pub use crate::search::{
    Discovery, GenerationSummary, Individual, KillReason, MotifSearch, RunSummary, SearchBuilder,
    SearchConfig, SearchObserver,
};
