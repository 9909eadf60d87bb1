//! Shuffled control background.
//!
//! The input sequences are concatenated in a random order and cut into
//! fixed-size chunks. Each generation is evaluated against one chunk, so the
//! null model rotates through the whole input before it is reshuffled.

use crate::base::Sequence;
use rand::seq::SliceRandom;
use rand::Rng;

/// Input sequences plus their current shuffled arrangement.
#[derive(Debug, Clone)]
pub struct Background {
    original: Vec<Sequence>,
    shuffled: Sequence,
    chunks: Vec<Sequence>,
    junctions: Vec<usize>,
    valid: Vec<usize>,
    chunk_size: usize,
    width: usize,
}

impl Background {
    /// Arrange `original` in input order. Call [`Background::refresh`] to
    /// shuffle it.
    ///
    /// `width` is the motif size used to decide which anchors are valid.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` or `width` is zero.
    pub fn new(original: Vec<Sequence>, chunk_size: usize, width: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        assert!(width > 0, "motif width must be positive");
        let order: Vec<usize> = (0..original.len()).collect();
        let mut background = Self {
            original,
            shuffled: Sequence::new(),
            chunks: Vec::new(),
            junctions: Vec::new(),
            valid: Vec::new(),
            chunk_size,
            width,
        };
        background.arrange(&order);
        background
    }

    /// Rebuild the shuffled background from a fresh random order of the
    /// input sequences.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<usize> = (0..self.original.len()).collect();
        order.shuffle(rng);
        self.arrange(&order);
    }

    fn arrange(&mut self, order: &[usize]) {
        self.shuffled = Sequence::concat(order.iter().map(|&i| &self.original[i]));

        self.junctions.clear();
        let mut offset = 0;
        for &i in order {
            offset += self.original[i].len();
            self.junctions.push(offset);
        }

        self.chunks = (0..self.shuffled.len())
            .step_by(self.chunk_size)
            .map(|start| self.shuffled.subsequence(start, start + self.chunk_size))
            .collect();

        self.valid = (0..self.shuffled.len())
            .filter(|&pos| self.check_position(pos))
            .collect();
    }

    fn check_position(&self, pos: usize) -> bool {
        let end = pos + self.width;
        if end > self.shuffled.len() {
            return false;
        }
        if pos / self.chunk_size != (end - 1) / self.chunk_size {
            return false;
        }
        !self.junctions.iter().any(|&j| pos < j && j < end)
    }

    pub fn original(&self) -> &[Sequence] {
        &self.original
    }

    pub fn shuffled(&self) -> &Sequence {
        &self.shuffled
    }

    pub fn chunks(&self) -> &[Sequence] {
        &self.chunks
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The chunk evaluated at `generation`.
    ///
    /// # Panics
    ///
    /// Panics if the background is empty.
    pub fn chunk(&self, generation: usize) -> &Sequence {
        &self.chunks[generation % self.chunks.len()]
    }

    /// Return `true` if a motif window anchored at `pos` fits, stays within
    /// one chunk and does not span two input sequences.
    pub fn is_valid_position(&self, pos: usize) -> bool {
        self.valid.binary_search(&pos).is_ok()
    }

    /// Every valid anchor, ascending.
    pub fn valid_positions(&self) -> &[usize] {
        &self.valid
    }

    /// Motif window at `pos` in the shuffled background.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a valid position.
    pub fn window(&self, pos: usize) -> Sequence {
        assert!(self.is_valid_position(pos), "invalid anchor position {pos}");
        self.shuffled.subsequence(pos, pos + self.width)
    }

    /// Mismatches between the window at `pos` and `motif`.
    pub(crate) fn distance_at(&self, pos: usize, motif: &Sequence) -> usize {
        self.shuffled.as_slice()[pos..pos + motif.len()]
            .iter()
            .zip(motif.as_slice())
            .filter(|(a, b)| !a.compatible(**b))
            .count()
    }

    /// Windows of the input sequences similar to `motif` on either strand, in
    /// the motif's orientation.
    pub fn occurrences(&self, motif: &Sequence, tolerance: usize) -> Vec<Sequence> {
        self.original
            .iter()
            .flat_map(|seq| seq.matching_windows(motif, tolerance))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn seqs(items: &[&str]) -> Vec<Sequence> {
        items.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_new_keeps_input_order() {
        let bg = Background::new(seqs(&["AAAA", "CCCC", "GG"]), 4, 2);
        assert_eq!(bg.shuffled().to_string(), "AAAACCCCGG");
        assert_eq!(bg.chunk_count(), 3);
        assert_eq!(bg.chunks()[2].to_string(), "GG");
    }

    #[test]
    fn test_chunks_cover_background() {
        let bg = Background::new(seqs(&["ACGTACGTAC"]), 3, 2);
        let chunks: Vec<String> = bg.chunks().iter().map(|c| c.to_string()).collect();
        assert_eq!(chunks, vec!["ACG", "TAC", "GTA", "C"]);
        assert_eq!(bg.chunk(5).to_string(), "TAC");
    }

    #[test]
    fn test_refresh_permutes_sequences_not_bases() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut bg = Background::new(seqs(&["AAAA", "CCCC", "GGGG", "TTTT"]), 16, 2);
        for _ in 0..10 {
            bg.refresh(&mut rng);
            let text = bg.shuffled().to_string();
            assert_eq!(text.len(), 16);
            for block in ["AAAA", "CCCC", "GGGG", "TTTT"] {
                assert!(text.contains(block), "{text}");
            }
        }
    }

    #[test]
    fn test_valid_positions_respect_chunks() {
        let bg = Background::new(seqs(&["ACGTACGTAC"]), 5, 3);
        // chunks [0,5) and [5,10); windows of 3 may start at 0..=2 and 5..=7
        assert_eq!(bg.valid_positions(), &[0, 1, 2, 5, 6, 7]);
        assert!(!bg.is_valid_position(3));
        assert!(!bg.is_valid_position(8));
    }

    #[test]
    fn test_valid_positions_respect_junctions() {
        let bg = Background::new(seqs(&["ACGT", "ACGTAC"]), 100, 3);
        // junction at 4: windows 2..5 and 3..6 would span both inputs
        assert_eq!(bg.valid_positions(), &[0, 1, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window() {
        let bg = Background::new(seqs(&["ACGTTGCA"]), 8, 4);
        assert_eq!(bg.window(2).to_string(), "GTTG");
        assert_eq!(bg.distance_at(2, &"GTAG".parse().unwrap()), 1);
    }

    #[test]
    #[should_panic(expected = "invalid anchor")]
    fn test_window_rejects_invalid_position() {
        let bg = Background::new(seqs(&["ACGTTGCA"]), 8, 4);
        bg.window(6);
    }

    #[test]
    fn test_occurrences_scan_original_input() {
        let bg = Background::new(seqs(&["TTACGTT", "GGACGTGG", "CCACGTCC"]), 5, 4);
        // ACGT is its own reverse complement, so each site counts on both strands
        assert_eq!(bg.occurrences(&"ACGT".parse().unwrap(), 0).len(), 6);
    }
}
