//! sigzone - Zoning-based feature templates for offline signature verification
//!
//! # Overview
//!
//! A binary signature image is split into zones by recursive quadrant
//! decomposition at the ink centroid. Every zone is then measured:
//!
//! - Ink centroid
//! - Ink-to-background transition count
//! - Aspect ratio
//! - Skew and slant angles
//!
//! Zones are emitted in a fixed depth-first order, so zone `i` of one sample
//! can be compared with zone `i` of another. Across several samples of the
//! same signer, the zones whose features agree form the stable part of the
//! signer's template.
//!
//! # Example
//!
//! ```
//! use sigzone::recog::{SampleSet, ZoningOptions};
//! use sigzone::{Pixel, PixelGrid, Region};
//!
//! // A short vertical stroke on a 64x64 background
//! let mut gm = PixelGrid::new(64, 64).unwrap().to_mut();
//! gm.fill_region(&Region::new(5, 5, 10, 19).unwrap(), Pixel::Ink)
//!     .unwrap();
//! let grid: PixelGrid = gm.into();
//!
//! let set = SampleSet::from_grids(&[grid.clone(), grid], ZoningOptions::default()).unwrap();
//! assert_eq!(set.samples()[0].len(), 64);
//! assert_eq!(set.stable_transition_zones().unwrap().stable_count(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use sigzone_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use sigzone_recog as recog;
pub use sigzone_region as region;
