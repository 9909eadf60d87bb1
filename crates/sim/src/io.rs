//! Reading input sequences.
//!
//! The search treats every non-header line of a FASTA-style file as its own
//! sequence; records are not joined across lines, so each line contributes
//! an independent stretch of background.

use crate::base::Sequence;
use crate::errors::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read sequences from a FASTA-style file.
///
/// ```text
/// >chr1 promoter set
/// ACGTACGTRYACGT
/// TTGACANNNNTATAAT
/// ```
///
/// yields two sequences. Header lines (`>` or `;`) and blank lines are
/// skipped; surrounding whitespace is trimmed.
pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<Sequence>, InputError> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Parse sequences from any buffered reader. See [`read_fasta`].
///
/// Fails on the first character outside the IUPAC alphabet (reporting the
/// 1-based line number) or when no sequence lines are present.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<Sequence>, InputError> {
    let mut sequences = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('>') || line.starts_with(';') {
            continue;
        }

        let seq = line
            .parse::<Sequence>()
            .map_err(|source| InputError::Parse { line: idx + 1, source })?;
        sequences.push(seq);
    }

    if sequences.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(sequences)
}
