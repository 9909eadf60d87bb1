//! Base types for sequence representation.
//!
//! This module provides the IUPAC nucleotide alphabet, canonical base sets
//! and the immutable `Sequence` type with its motif primitives.

mod nucleotide;
mod sequence;

pub use nucleotide::{Base, BaseSet};
pub use sequence::Sequence;
