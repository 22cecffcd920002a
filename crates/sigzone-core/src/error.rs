//! Error types for sigzone-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Malformed input (zero-sized grids, non-binary pixel values, inverted or
//! out-of-grid regions) is rejected here so that downstream crates can treat
//! every grid and region they receive as well-formed.

use thiserror::Error;

/// sigzone-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A raw pixel value that is neither ink (0) nor background (1)
    #[error("invalid pixel value {value} at ({x}, {y}): expected 0 (ink) or 1 (background)")]
    InvalidPixelValue { x: u32, y: u32, value: u8 },

    /// Row lengths differ within a grid literal
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Raw buffer length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Pixel coordinate outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Region with left > right or top > bottom
    #[error("inverted region: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvertedRegion {
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    },

    /// Region that does not fit inside the grid
    #[error("region ({left}..={right}, {top}..={bottom}) exceeds {width}x{height} grid")]
    RegionOutOfBounds {
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
        width: u32,
        height: u32,
    },

    /// Operation requires a region with at least one pixel
    #[error("empty region: {0}")]
    EmptyRegion(&'static str),

    /// A least-squares fit with no unique solution
    #[error("degenerate fit: {0}")]
    DegenerateFit(&'static str),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for sigzone-core operations
pub type Result<T> = std::result::Result<T, Error>;
