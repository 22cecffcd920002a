//! sigzone-region - Recursive zoning for signature images
//!
//! This crate splits a binary signature image into a fixed number of zones.
//! Each level of the recursion splits a region into four quadrants at the
//! region's own ink centroid (not its midpoint), so zone boundaries follow
//! the distribution of the strokes. At depth `D` the result is `4^D` zones
//! in a fixed depth-first order, which is the index every per-zone feature
//! sequence is aligned on.
//!
//! # Example
//!
//! ```
//! use sigzone_core::PixelGrid;
//! use sigzone_region::{ZoningOptions, zone_grid};
//!
//! let grid = PixelGrid::from_ascii(
//!     "........
//!      .##..#..
//!      ...##...
//!      ........",
//! )
//! .unwrap();
//! let layout = zone_grid(&grid, &ZoningOptions::default()).unwrap();
//! assert_eq!(layout.len(), 64);
//! ```

pub mod error;
pub mod zoning;

// Re-export core types
pub use sigzone_core;

pub use error::{RegionError, RegionResult};

pub use zoning::{
    DEFAULT_ZONING_DEPTH, MAX_ZONING_DEPTH, Quadrant, ZoneLayout, ZoningOptions, ZoningRoot,
    split_region, zone_grid, zone_path,
};
