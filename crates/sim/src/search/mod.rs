//! Motif search engine and population management.
//!
//! The most commonly used types are re-exported here:
//!
//! - `MotifSearch`: the engine that runs generations of decimation, breeding
//!   and evaluation against a rotating shuffled background.
//! - `SearchBuilder`: fluent builder for constructing `MotifSearch` instances
//!   with defaults and validation.
//! - `SearchObserver`: callback trait receiving discoveries, culls and
//!   per-generation summaries.

pub mod background;
pub mod builder;
pub mod config;
pub mod engine;
pub mod individual;
pub mod population;
pub mod report;
pub mod selection;

pub use background::Background;
pub use builder::SearchBuilder;
pub use config::SearchConfig;
pub use engine::MotifSearch;
pub use individual::Individual;
pub use population::Population;
pub use report::{Discovery, GenerationSummary, RunSummary, SearchObserver};
pub use selection::{decimate, KillReason, Verdict};
