//! Error types for sigzone-region

use thiserror::Error;

/// Errors that can occur during zoning
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sigzone_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for zoning operations
pub type RegionResult<T> = Result<T, RegionError>;
