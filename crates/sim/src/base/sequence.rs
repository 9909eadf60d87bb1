use super::Base;
use crate::errors::InvalidSequence;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Immutable DNA sequence over the IUPAC alphabet.
///
/// Bases live in a reference-counted `Arc<[Base]>`, so cloning is cheap and
/// every derived operation (`subsequence`, `reverse_complement`, `shuffle`,
/// ...) returns a new `Sequence` instead of editing in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Arc<[Base]>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    ///
    /// ```rust
    /// # use motevo_sim::base::Sequence;
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Create a `Sequence` from a vector of `Base`s.
    pub fn from_bases(bases: Vec<Base>) -> Self {
        Self(bases.into())
    }

    /// Parse text, silently skipping characters outside the IUPAC alphabet.
    ///
    /// Use `str::parse` to reject such characters instead.
    pub fn parse_lossy(s: &str) -> Self {
        s.bytes().filter_map(Base::from_ascii).collect()
    }

    /// Decode a numeric encoding: each value is rounded up and 1..=4 map to
    /// A, C, G, T.
    pub fn from_encoding(values: &[f64]) -> Result<Self, InvalidSequence> {
        values
            .iter()
            .enumerate()
            .map(|(position, &value)| {
                Base::from_encoding(value)
                    .map_err(|_| InvalidSequence::InvalidEncoding { value, position })
            })
            .collect()
    }

    /// Numeric encoding of this sequence (A=1 ... T=4).
    ///
    /// Fails on the first ambiguity code.
    pub fn to_encoding(&self) -> Result<Vec<f64>, InvalidSequence> {
        self.iter()
            .enumerate()
            .map(|(position, base)| {
                base.encoding()
                    .ok_or(InvalidSequence::NonCanonical { base, position })
            })
            .collect()
    }

    /// Concatenate `parts` into one sequence.
    pub fn concat<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a Sequence>,
    {
        let bases: Vec<Base> = parts
            .into_iter()
            .flat_map(|s| s.as_slice().iter().copied())
            .collect();
        Self::from_bases(bases)
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Base` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Base> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Base` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Base] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Base> + '_ {
        self.0.iter().copied()
    }

    /// Bases in `[start, stop)`. `stop` is clamped to the sequence length.
    ///
    /// # Panics
    ///
    /// Panics unless `start < stop` after clamping.
    pub fn subsequence(&self, start: usize, stop: usize) -> Self {
        let stop = stop.min(self.len());
        assert!(
            start < stop,
            "subsequence requires start < stop (start = {start}, stop = {stop}, len = {})",
            self.len()
        );
        Self::from_bases(self.0[start..stop].to_vec())
    }

    pub fn reverse(&self) -> Self {
        self.0.iter().rev().copied().collect()
    }

    pub fn complement(&self) -> Self {
        self.iter().map(Base::complement).collect()
    }

    pub fn reverse_complement(&self) -> Self {
        self.0.iter().rev().map(|b| b.complement()).collect()
    }

    /// A uniformly random reordering of the same bases.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut bases = self.0.to_vec();
        bases.shuffle(rng);
        Self::from_bases(bases)
    }

    /// Number of positions where `self` and `motif` are incompatible.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn distance(&self, motif: &Sequence) -> usize {
        assert_same_len(self.len(), motif.len());
        self.0
            .iter()
            .zip(motif.0.iter())
            .filter(|(a, b)| !a.compatible(**b))
            .count()
    }

    /// Return `true` if at most `tolerance` positions are incompatible.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn is_similar(&self, motif: &Sequence, tolerance: usize) -> bool {
        assert_same_len(self.len(), motif.len());
        within_tolerance(&self.0, &motif.0, tolerance)
    }

    /// Offsets of every window similar to `motif`.
    ///
    /// The window width is always `motif.len()`.
    ///
    /// An empty motif, or one longer than `self`, matches nowhere.
    pub fn find_similar(&self, motif: &Sequence, tolerance: usize) -> Vec<usize> {
        if motif.is_empty() || motif.len() > self.len() {
            return Vec::new();
        }
        self.0
            .windows(motif.len())
            .enumerate()
            .filter(|(_, window)| within_tolerance(window, &motif.0, tolerance))
            .map(|(offset, _)| offset)
            .collect()
    }

    /// Matches of `motif` on both strands, with windows as wide as `motif`.
    pub fn count_similar(&self, motif: &Sequence, tolerance: usize) -> usize {
        self.find_similar(motif, tolerance).len()
            + self.find_similar(&motif.reverse_complement(), tolerance).len()
    }

    /// Column-wise consensus of equal-length sequences.
    ///
    /// Each column tallies A, C, G and T; an ambiguity code counts once for
    /// every base it stands for. The column emits the IUPAC symbol for the set
    /// of bases tied at the highest count: a single winner gives that base, a
    /// two-way tie gives M/R/W/S/Y/K, a three-way tie gives V/H/D/B and a
    /// four-way tie gives N. An empty input gives an empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequences do not all have the same length.
    pub fn find_consensus(sequences: &[Sequence]) -> Self {
        let Some(first) = sequences.first() else {
            return Self::new();
        };
        let width = first.len();
        let mut counts = vec![[0usize; 4]; width];
        for seq in sequences {
            assert_same_len(width, seq.len());
            for (column, base) in counts.iter_mut().zip(seq.iter()) {
                for canonical in base.canonical_set().iter() {
                    if let Some(idx) = canonical.canonical_index() {
                        column[idx as usize] += 1;
                    }
                }
            }
        }
        counts.iter().map(column_consensus).collect()
    }

    /// Consensus of every window of `self` similar to `motif` on either
    /// strand. Reverse-strand windows are reverse-complemented so all of them
    /// read in the motif's orientation.
    pub fn consensus(&self, motif: &Sequence, tolerance: usize) -> Self {
        let windows = self.matching_windows(motif, tolerance);
        Self::find_consensus(&windows)
    }

    /// Windows similar to `motif`, forward strand first, each in the motif's
    /// orientation.
    pub fn matching_windows(&self, motif: &Sequence, tolerance: usize) -> Vec<Sequence> {
        let width = motif.len();
        let reverse = motif.reverse_complement();
        let forward = self
            .find_similar(motif, tolerance)
            .into_iter()
            .map(|pos| self.subsequence(pos, pos + width));
        let backward = self
            .find_similar(&reverse, tolerance)
            .into_iter()
            .map(|pos| self.subsequence(pos, pos + width).reverse_complement());
        forward.chain(backward).collect()
    }
}

#[inline]
fn assert_same_len(expected: usize, actual: usize) {
    assert!(
        expected == actual,
        "sequence lengths differ ({expected} vs {actual})"
    );
}

/// Short-circuiting mismatch count over two equal-length slices.
#[inline]
fn within_tolerance(window: &[Base], motif: &[Base], tolerance: usize) -> bool {
    let mut mismatches = 0;
    for (a, b) in window.iter().zip(motif) {
        if !a.compatible(*b) {
            mismatches += 1;
            if mismatches > tolerance {
                return false;
            }
        }
    }
    true
}

fn column_consensus(counts: &[usize; 4]) -> Base {
    let max = counts.iter().copied().max().unwrap_or(0);
    let bits = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == max)
        .fold(0u8, |acc, (idx, _)| acc | (1 << idx));
    Base::from_set(super::BaseSet::from_bits(bits)).unwrap_or(Base::N)
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Base> for Sequence {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Base>> for Sequence {
    fn from(bases: Vec<Base>) -> Self {
        Self::from_bases(bases)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &base in self.0.iter() {
            write!(f, "{}", base.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGTRYN") into a `Sequence`.
    ///
    /// Case-insensitive. Characters outside the IUPAC alphabet produce an
    /// `InvalidSequence` error naming the first offender.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, ch)| {
                Base::try_from(ch).map_err(|_| InvalidSequence::InvalidChar { ch, position })
            })
            .collect()
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
