//! Error types for sigzone-recog

use thiserror::Error;

/// Errors that can occur during feature extraction and stability analysis
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sigzone_core::Error),

    /// Zoning error
    #[error("zoning error: {0}")]
    Region(#[from] sigzone_region::RegionError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Stability analysis needs at least one sample
    #[error("no samples to compare")]
    EmptySampleSet,

    /// A sample's zone sequence does not line up with the first sample's
    #[error("sample {sample} has {actual} zones, expected {expected}")]
    MisalignedSamples {
        sample: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
