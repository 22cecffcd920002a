//! Measurements on binary grids
//!
//! Ink bounding box, ink centroid, ink count and ink coordinate collection.
//! All region-based measurements use inclusive bounds on both sides, and an
//! empty region (inverted bounds) simply contains no ink.

use super::PixelGrid;
use crate::error::Result;
use crate::pta::Pta;
use crate::region::Region;

/// Result of an exhaustive ink bounding-box scan.
///
/// The scan starts with `left = width`, `right = 0`, `top = height`,
/// `bottom = 0` and tightens those values on every ink pixel. When the grid
/// holds no ink the starting values come back unchanged; check
/// [`InkBounds::is_empty`] (or use [`InkBounds::to_region`]) before treating
/// the values as a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl InkBounds {
    /// Starting values for a `width` x `height` scan
    pub fn sentinel(width: u32, height: u32) -> Self {
        Self {
            left: width,
            right: 0,
            top: height,
            bottom: 0,
        }
    }

    /// True when no ink pixel was found
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// The enclosing rectangle, or `None` when no ink was found
    pub fn to_region(&self) -> Option<Region> {
        if self.is_empty() {
            return None;
        }
        Some(Region::new_unchecked(
            self.left as i32,
            self.right as i32,
            self.top as i32,
            self.bottom as i32,
        ))
    }
}

impl PixelGrid {
    /// Find the tightest rectangle containing every ink pixel.
    ///
    /// Visits every pixel (no early exit). Returns the
    /// [`InkBounds::sentinel`] values unchanged for an ink-free grid.
    ///
    /// ```
    /// use sigzone_core::PixelGrid;
    ///
    /// let grid = PixelGrid::from_ascii(
    ///     "....
    ///      .#..
    ///      ..#.",
    /// )
    /// .unwrap();
    /// let bounds = grid.ink_bounds();
    /// assert_eq!((bounds.left, bounds.right, bounds.top, bounds.bottom), (1, 2, 1, 2));
    /// ```
    pub fn ink_bounds(&self) -> InkBounds {
        let mut bounds = InkBounds::sentinel(self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.is_ink(x, y) {
                    bounds.left = bounds.left.min(x);
                    bounds.right = bounds.right.max(x);
                    bounds.top = bounds.top.min(y);
                    bounds.bottom = bounds.bottom.max(y);
                }
            }
        }
        bounds
    }

    /// Count ink pixels inside `region`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RegionOutOfBounds`] if a non-empty region
    /// leaves the grid.
    pub fn ink_count(&self, region: &Region) -> Result<u64> {
        self.check_region(region)?;
        let mut n = 0u64;
        for y in region.rows() {
            for x in region.columns() {
                if self.is_ink(x as u32, y as u32) {
                    n += 1;
                }
            }
        }
        Ok(n)
    }

    /// Center of mass of the ink pixels inside `region`.
    ///
    /// Returns `(0.0, 0.0)` when the region holds no ink. That value is a
    /// placeholder, not a location: it may lie outside the region.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RegionOutOfBounds`] if a non-empty region
    /// leaves the grid.
    pub fn centroid(&self, region: &Region) -> Result<(f64, f64)> {
        self.check_region(region)?;
        let mut sx = 0u64;
        let mut sy = 0u64;
        let mut n = 0u64;
        for y in region.rows() {
            for x in region.columns() {
                if self.is_ink(x as u32, y as u32) {
                    sx += x as u64;
                    sy += y as u64;
                    n += 1;
                }
            }
        }
        if n == 0 {
            return Ok((0.0, 0.0));
        }
        Ok((sx as f64 / n as f64, sy as f64 / n as f64))
    }

    /// Collect the coordinates of the ink pixels inside `region`, in
    /// row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RegionOutOfBounds`] if a non-empty region
    /// leaves the grid.
    pub fn ink_points(&self, region: &Region) -> Result<Pta> {
        self.check_region(region)?;
        let mut pta = Pta::new();
        for y in region.rows() {
            for x in region.columns() {
                if self.is_ink(x as u32, y as u32) {
                    pta.push(f64::from(x), f64::from(y));
                }
            }
        }
        Ok(pta)
    }
}
