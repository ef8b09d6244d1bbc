//! Error types for the cleaning pipeline

use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("format error: {0}")]
    Format(#[from] surveyclean_formats::Error),

    #[error("transform error: {0}")]
    Transform(#[from] surveyclean_transforms::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
