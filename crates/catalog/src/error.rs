//! Error types for the catalog crate.
//!
//! Only loading can fail. Once a `Catalog` exists every query on it is total,
//! and the filtering layer built on top never sees these errors directly: the
//! caller folds them into `LoadState::Failed`.

use thiserror::Error;

/// Errors that can occur while loading a course collection
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The JSON document could not be decoded into course records
    #[error("Invalid JSON in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Line in a CSV file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Expected number of fields in a row doesn't match the header
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// The CSV header is missing a column every record needs
    #[error("Missing column {column} in {file}")]
    MissingColumn { file: String, column: String },

    /// File extension is neither `.csv` nor `.json`
    #[error("Unsupported course file format: {path}")]
    UnsupportedFormat { path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
