//! Region - Rectangular areas of a pixel grid
//!
//! Unlike a width/height box, a [`Region`] is described by its four
//! *inclusive* edges: `left..=right` columns and `top..=bottom` rows.
//! This is the representation the zoning code splits on, since a split at
//! column `cx` yields `left..=cx` and `cx + 1..=right`.
//!
//! # Empty regions
//!
//! Regions created by callers through [`Region::new`] are never inverted.
//! Recursive zoning, however, may place a split point outside the region
//! being split (an ink-free region reports its centroid at the origin), and
//! the resulting sub-regions are kept exactly as computed through
//! [`Region::new_unchecked`]. Such regions have `left > right` or
//! `top > bottom`; their extents clamp to zero and they contain no pixels.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// A rectangle with inclusive bounds on all four sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First column
    pub left: i32,
    /// Last column (inclusive)
    pub right: i32,
    /// First row
    pub top: i32,
    /// Last row (inclusive)
    pub bottom: i32,
}

impl Region {
    /// Create a new region
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedRegion`] if `left > right` or `top > bottom`.
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Result<Self> {
        if left > right || top > bottom {
            return Err(Error::InvertedRegion {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Create a region without validation
    ///
    /// The result may be empty (inverted bounds).
    pub const fn new_unchecked(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Region covering a whole `width` x `height` grid
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            right: width as i32 - 1,
            top: 0,
            bottom: height as i32 - 1,
        }
    }

    /// Number of columns, or 0 for a region with `left > right`
    #[inline]
    pub fn width(&self) -> u32 {
        (i64::from(self.right) - i64::from(self.left) + 1).max(0) as u32
    }

    /// Number of rows, or 0 for a region with `top > bottom`
    #[inline]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom) - i64::from(self.top) + 1).max(0) as u32
    }

    /// Number of pixels covered
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Check if the region covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Check if the region lies entirely inside a `width` x `height` grid.
    ///
    /// Empty regions always fit.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        if self.is_empty() {
            return true;
        }
        self.left >= 0
            && self.top >= 0
            && i64::from(self.right) < i64::from(width)
            && i64::from(self.bottom) < i64::from(height)
    }

    /// Width-to-height ratio.
    ///
    /// Returns `f64::INFINITY` when the height is zero, which only happens
    /// for empty regions produced by splitting.
    pub fn aspect_ratio(&self) -> f64 {
        let h = self.height();
        if h == 0 {
            return f64::INFINITY;
        }
        f64::from(self.width()) / f64::from(h)
    }

    /// Columns covered, in scan order
    #[inline]
    pub fn columns(&self) -> RangeInclusive<i32> {
        self.left..=self.right
    }

    /// Rows covered, in scan order
    #[inline]
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.top..=self.bottom
    }

    /// The four quadrants obtained by splitting after column `cx` and row `cy`.
    ///
    /// Order is top-left, top-right, bottom-left, bottom-right. The split
    /// point is not required to lie inside the region; quadrants are built
    /// unchecked and may be empty.
    pub fn quadrants(&self, cx: i32, cy: i32) -> [Region; 4] {
        [
            Region::new_unchecked(self.left, cx, self.top, cy),
            Region::new_unchecked(cx + 1, self.right, self.top, cy),
            Region::new_unchecked(self.left, cx, cy + 1, self.bottom),
            Region::new_unchecked(cx + 1, self.right, cy + 1, self.bottom),
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.right, self.top, self.bottom
        )
    }
}
