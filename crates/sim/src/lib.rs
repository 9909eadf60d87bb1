//! # Motif search crate
//!
//! The `motevo_sim` crate provides the core of the motif search. It includes
//! modules for the IUPAC alphabet and sequence primitives, reading input,
//! the random primitives shared by every stochastic step, and the genetic
//! search engine that evaluates, culls and breeds candidate motifs.

pub mod base;
pub mod errors;
pub mod io;
pub mod prelude;
pub mod random;
pub mod search;

pub use base::{Base, BaseSet, Sequence};
