//! sigzone-core - Basic data structures for signature zoning
//!
//! This crate provides the fundamental data structures shared by the
//! zoning and feature crates:
//!
//! - [`PixelGrid`] / [`PixelGridMut`] - Binary image (immutable / mutable)
//! - [`Pixel`] - Ink or background, with the raw `0 = ink, 1 = background`
//!   convention of black/white image conversion
//! - [`Region`] - Rectangle with inclusive bounds
//! - [`InkBounds`] - Result of the ink bounding-box scan
//! - [`Pta`] - Point array with linear least-squares fitting
//!
//! # Example
//!
//! ```
//! use sigzone_core::{PixelGrid, Region};
//!
//! let grid = PixelGrid::from_ascii(
//!     ".##.
//!      .##.
//!      ....",
//! )
//! .unwrap();
//! let (cx, cy) = grid.centroid(&grid.bounds()).unwrap();
//! assert_eq!((cx, cy), (1.5, 0.5));
//! assert_eq!(grid.ink_bounds().to_region(), Some(Region::new(1, 2, 0, 1).unwrap()));
//! ```

pub mod error;
pub mod grid;
pub mod pta;
pub mod region;

pub use error::{Error, Result};
pub use grid::{InkBounds, Pixel, PixelGrid, PixelGridMut};
pub use pta::Pta;
pub use region::Region;
