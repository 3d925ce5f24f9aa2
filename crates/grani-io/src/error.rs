//! Error types for the text grammar.

use thiserror::Error;

/// Errors that can occur while parsing challenge input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Wrong number of `XXX`-separated sections.
    #[error("Expected {expected} sections separated by 'XXX', found {found}")]
    SectionCount {
        /// Required section count.
        expected: usize,
        /// Sections found.
        found: usize,
    },

    /// A section contained no rows.
    #[error("Section '{0}' is empty")]
    EmptySection(&'static str),

    /// A row's field count differs from the first row's.
    #[error("Row {row} has {got} fields, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Field count of the first row.
        expected: usize,
        /// Field count of the offending row.
        got: usize,
    },

    /// Label count does not match the training row count.
    #[error("Found {labels} labels for {rows} training rows")]
    LabelCountMismatch {
        /// Number of labels.
        labels: usize,
        /// Number of training rows.
        rows: usize,
    },

    /// A label outside {-1, 0, 1}.
    #[error("Label {0} is not one of -1, 0, 1")]
    InvalidLabel(i64),

    /// A field failed numeric parsing.
    #[error("Invalid number '{token}'")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },

    /// A Hamiltonian record did not start with a sign token.
    #[error("Record {record}: expected sign '+' or '-', found '{found}'")]
    ExpectedSign {
        /// Zero-based record index.
        record: usize,
        /// What was found instead.
        found: String,
    },

    /// A Hamiltonian record's magnitude was missing or malformed.
    #[error("Record {record}: expected a non-negative magnitude, found '{found}'")]
    ExpectedMagnitude {
        /// Zero-based record index.
        record: usize,
        /// What was found instead.
        found: String,
    },

    /// A Hamiltonian record had no operator tags.
    #[error("Record {record}: no operator tags after the coefficient")]
    MissingOperator {
        /// Zero-based record index.
        record: usize,
    },

    /// An operator tag that is not I, X, Y, or Z (or lacks a site index).
    #[error("Record {record}: invalid operator tag '{token}'")]
    InvalidOperator {
        /// Zero-based record index.
        record: usize,
        /// The offending token.
        token: String,
    },

    /// Input was empty.
    #[error("Input is empty")]
    EmptyInput,
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
