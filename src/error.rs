//! Error types for explog.
//!
//! The logger itself never fails: appends accept any input verbatim and the
//! default-column accessors are infallible. The only fallible surface is the
//! `*_log_with_columns` family, which rejects a column-name list whose length
//! does not match the log's shape.

use thiserror::Error;

/// All explog errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Wrong number of column names for the requested log
    #[error("wrong column count: expected {expected}, got {got}")]
    ColumnCount {
        /// Number of columns the log has
        expected: usize,
        /// Number of names the caller supplied
        got: usize,
    },
}

/// Result type for explog operations.
pub type Result<T> = std::result::Result<T, Error>;
