use thiserror::Error;

use crate::base::Base;

/// Error returned when attempting to convert an invalid byte, character or
/// numeric value into a `Base`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidBase {
    #[error("invalid base byte: {0} ('{ch}')", ch = *.0 as char)]
    Byte(u8),
    #[error("invalid base character: '{0}'")]
    Char(char),
    #[error("invalid base encoding: {0} (must be within [0, 4])")]
    Encoding(f64),
}

/// Error type for failures when constructing or converting a `Sequence`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidSequence {
    /// A character was not recognized as an IUPAC symbol.
    #[error("invalid character '{ch}' at position {position}")]
    InvalidChar { ch: char, position: usize },

    /// A numeric value outside the encoding range.
    #[error("invalid encoding {value} at position {position}")]
    InvalidEncoding { value: f64, position: usize },

    /// An ambiguity code where only A, C, G or T can be encoded.
    #[error("base '{base}' at position {position} has no numeric encoding")]
    NonCanonical { base: Base, position: usize },
}

/// Errors raised while reading input sequences.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: InvalidSequence,
    },

    #[error("input contains no sequences")]
    Empty,
}

/// Errors that can occur while configuring or running a motif search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A required builder field was not set.
    #[error("missing required parameter: {0}")]
    MissingRequired(&'static str),

    /// Input sequences could not be read.
    #[error("failed to import sequences: {0}")]
    SequenceImport(String),

    /// A parameter value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Fewer valid, unclaimed anchor positions remain than were requested.
    #[error("requested {requested} positions but only {available} valid positions are free")]
    InsufficientPositions { requested: usize, available: usize },

    /// No valid, unclaimed position matches an offspring motif at any tolerance.
    #[error("no free position matches offspring motif {motif}")]
    PlacementExhausted { motif: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_display() {
        assert_eq!(InvalidBase::Byte(b'X').to_string(), "invalid base byte: 88 ('X')");
        assert_eq!(InvalidBase::Char('?').to_string(), "invalid base character: '?'");
    }

    #[test]
    fn test_invalid_sequence_display() {
        let err = InvalidSequence::InvalidChar { ch: 'Z', position: 3 };
        assert_eq!(err.to_string(), "invalid character 'Z' at position 3");
        let err = InvalidSequence::NonCanonical { base: Base::R, position: 0 };
        assert!(err.to_string().contains("'R'"));
    }

    #[test]
    fn test_input_error_parse_carries_line() {
        let err = InputError::Parse {
            line: 7,
            source: InvalidSequence::InvalidChar { ch: 'J', position: 2 },
        };
        assert_eq!(err.to_string(), "line 7: invalid character 'J' at position 2");
    }

    #[test]
    fn test_search_error_display() {
        let err = SearchError::InsufficientPositions { requested: 10, available: 4 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("4"));
        assert_eq!(
            SearchError::MissingRequired("sequences").to_string(),
            "missing required parameter: sequences"
        );
    }
}
