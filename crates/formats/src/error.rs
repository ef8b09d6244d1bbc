//! Error types for the table data model and CSV I/O

use std::path::PathBuf;
use thiserror::Error;

/// Format and table errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file not found: {0}")]
    NotFound(PathBuf),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row has {found} fields, table has {expected} columns")]
    RowArity { expected: usize, found: usize },
}

/// Result type alias for format operations
pub type Result<T> = std::result::Result<T, Error>;
