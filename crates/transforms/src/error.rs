//! Error types for column transforms

use thiserror::Error;

/// Transform errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("column '{column}' holds non-integral value {value}")]
    NonIntegral { column: String, value: f64 },

    #[error("column '{column}' holds non-numeric value '{value}'")]
    TypeMismatch { column: String, value: String },
}

/// Result type alias for transform operations
pub type Result<T> = std::result::Result<T, Error>;
