use crate::model::style::AtomStyle;
use thiserror::Error;

/// Failure kinds reported by [`Error::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingKeyword,
    MalformedNumber,
    TruncatedRecord,
    UnexpectedEndOfInput,
    StyleAlreadyDetected,
    Io,
}

/// Everything that can abort reading a LAMMPS data file.
///
/// Line numbers are 1-based and count every line of the input, including
/// the title and blank separators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("expected '{keyword}' on line {line}, found {content:?}")]
    MissingKeyword {
        line: usize,
        keyword: &'static str,
        content: String,
    },

    #[error("invalid {field} '{token}' on line {line}")]
    MalformedNumber {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("{record} on line {line} has {found} of {expected} required fields")]
    TruncatedRecord {
        line: usize,
        record: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("input ended before {expected} (line {line})")]
    UnexpectedEndOfInput { line: usize, expected: String },

    #[error("atom style was already detected as '{0}'; only one Atoms section is supported")]
    StyleAlreadyDetected(AtomStyle),
}

impl Error {
    pub fn missing_keyword(line: usize, keyword: &'static str, content: &str) -> Self {
        Self::MissingKeyword {
            line,
            keyword,
            content: content.to_string(),
        }
    }

    pub fn malformed_number(line: usize, field: &'static str, token: &str) -> Self {
        Self::MalformedNumber {
            line,
            field,
            token: token.to_string(),
        }
    }

    pub fn truncated(line: usize, record: &'static str, expected: usize, found: usize) -> Self {
        Self::TruncatedRecord {
            line,
            record,
            expected,
            found,
        }
    }

    pub fn end_of_input(line: usize, expected: impl Into<String>) -> Self {
        Self::UnexpectedEndOfInput {
            line,
            expected: expected.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::MissingKeyword { .. } => ErrorKind::MissingKeyword,
            Error::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Error::TruncatedRecord { .. } => ErrorKind::TruncatedRecord,
            Error::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            Error::StyleAlreadyDetected(_) => ErrorKind::StyleAlreadyDetected,
        }
    }

    /// Line the failure was detected on, when it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingKeyword { line, .. }
            | Error::MalformedNumber { line, .. }
            | Error::TruncatedRecord { line, .. }
            | Error::UnexpectedEndOfInput { line, .. } => Some(*line),
            Error::Io { .. } | Error::StyleAlreadyDetected(_) => None,
        }
    }
}
