//! PixelGrid - The binary image container
//!
//! A `PixelGrid` is a read-only 2D grid of binary pixels addressed by
//! `(x, y)` = (column, row) with the origin at the top-left corner.
//!
//! # Pixel convention
//!
//! The raw convention accepted at the edges of the crate is the one produced
//! by black/white image conversion: `0` = ink, `1` = background. Internally
//! the grid stores ink as a set bit, so an all-zero buffer is a blank page.
//!
//! # Pixel layout
//!
//! - Pixels are packed 1 bit each into 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//!
//! # Ownership model
//!
//! `PixelGrid` uses `Arc` for cheap cloning (shared ownership), so one grid
//! can be handed to several extraction workers. To modify pixels, convert to
//! [`PixelGridMut`] via [`PixelGrid::try_into_mut`] or [`PixelGrid::to_mut`],
//! then convert back with `Into<PixelGrid>`.

mod access;
mod clip;
mod measurement;

pub use access::*;
pub use measurement::InkBounds;

use crate::error::{Error, Result};
use crate::region::Region;
use std::sync::Arc;

/// A single binary pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Drawn content (raw value 0)
    Ink,
    /// Paper (raw value 1)
    Background,
}

impl Pixel {
    /// Raw value used for ink
    pub const INK_VALUE: u8 = 0;
    /// Raw value used for background
    pub const BACKGROUND_VALUE: u8 = 1;

    /// Interpret a raw black/white value.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[inline]
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            Self::INK_VALUE => Some(Pixel::Ink),
            Self::BACKGROUND_VALUE => Some(Pixel::Background),
            _ => None,
        }
    }

    /// Raw black/white value (0 = ink, 1 = background)
    #[inline]
    pub fn raw(self) -> u8 {
        match self {
            Pixel::Ink => Self::INK_VALUE,
            Pixel::Background => Self::BACKGROUND_VALUE,
        }
    }

    /// Check if this is an ink pixel
    #[inline]
    pub fn is_ink(self) -> bool {
        self == Pixel::Ink
    }
}

/// Internal grid data
#[derive(Debug, Clone)]
struct GridData {
    width: u32,
    height: u32,
    /// Words per line
    wpl: u32,
    /// Packed rows, ink bits set
    data: Vec<u32>,
}

impl GridData {
    fn blank(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = width.div_ceil(32);
        let data = vec![0u32; wpl as usize * height as usize];
        Ok(Self {
            width,
            height,
            wpl,
            data,
        })
    }

    #[inline]
    fn row(&self, y: u32) -> &[u32] {
        let start = (y * self.wpl) as usize;
        &self.data[start..start + self.wpl as usize]
    }
}

/// Binary image container
///
/// # Examples
///
/// ```
/// use sigzone_core::{Pixel, PixelGrid};
///
/// let grid = PixelGrid::from_rows(&[[1u8, 0, 1], [1, 1, 1]]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get_pixel(1, 0), Some(Pixel::Ink));
/// ```
#[derive(Debug, Clone)]
pub struct PixelGrid {
    inner: Arc<GridData>,
}

impl PixelGrid {
    /// Create an all-background grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelGrid {
            inner: Arc::new(GridData::blank(width, height)?),
        })
    }

    /// Create a grid from rows of raw values (0 = ink, 1 = background).
    ///
    /// # Errors
    ///
    /// Fails on an empty row set, rows of unequal length, or values other
    /// than 0 and 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = GridData::blank(width as u32, height as u32)?.into_mut();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            grid.load_raw_row(y as u32, row)?;
        }
        Ok(grid.into())
    }

    /// Create a grid from a flat row-major buffer of raw values.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions, a buffer whose length is not
    /// `width * height`, or values other than 0 and 1.
    pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> Result<Self> {
        let mut grid = GridData::blank(width, height)?.into_mut();
        let expected = width as usize * height as usize;
        if raw.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: raw.len(),
            });
        }
        for (y, row) in raw.chunks_exact(width as usize).enumerate() {
            grid.load_raw_row(y as u32, row)?;
        }
        Ok(grid.into())
    }

    /// Create a grid from an ASCII picture.
    ///
    /// Each non-blank line is a row; `#` marks ink and `.` background.
    /// Leading and trailing whitespace on each line is ignored.
    ///
    /// ```
    /// use sigzone_core::PixelGrid;
    ///
    /// let grid = PixelGrid::from_ascii(
    ///     "..#.
    ///      .##.
    ///      ....",
    /// )
    /// .unwrap();
    /// assert_eq!((grid.width(), grid.height()), (4, 3));
    /// assert!(grid.is_ink(2, 0));
    /// ```
    pub fn from_ascii(picture: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in picture.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = line
                .chars()
                .map(|c| match c {
                    '#' => Ok(Pixel::INK_VALUE),
                    '.' => Ok(Pixel::BACKGROUND_VALUE),
                    other => Err(Error::InvalidParameter(format!(
                        "unexpected character {other:?} in grid picture"
                    ))),
                })
                .collect::<Result<Vec<u8>>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of 32-bit words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Get the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the packed words of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        self.inner.row(y)
    }

    /// Region covering the whole grid
    #[inline]
    pub fn bounds(&self) -> Region {
        Region::full(self.width(), self.height())
    }

    /// Check that `region` lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] for a non-empty region that
    /// extends past any grid edge.
    pub fn check_region(&self, region: &Region) -> Result<()> {
        if region.fits_within(self.width(), self.height()) {
            Ok(())
        } else {
            Err(Error::RegionOutOfBounds {
                left: region.left,
                right: region.right,
                top: region.top,
                bottom: region.bottom,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Check whether two grids hold the same pixels.
    pub fn same_pixels(&self, other: &PixelGrid) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.data() == other.data()
    }

    /// Try to get exclusive access to the pixels.
    ///
    /// Fails (returning `self`) if the data is shared with another clone.
    pub fn try_into_mut(self) -> std::result::Result<PixelGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(PixelGridMut { inner }),
            Err(inner) => Err(PixelGrid { inner }),
        }
    }

    /// Create a mutable copy of the pixels.
    pub fn to_mut(&self) -> PixelGridMut {
        PixelGridMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl GridData {
    fn into_mut(self) -> PixelGridMut {
        PixelGridMut { inner: self }
    }
}

/// Mutable binary image
///
/// Used to build grids pixel by pixel; convert to [`PixelGrid`] with
/// `Into` once done.
#[derive(Debug)]
pub struct PixelGridMut {
    inner: GridData,
}

impl PixelGridMut {
    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get mutable packed words of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let wpl = self.inner.wpl as usize;
        let start = y as usize * wpl;
        &mut self.inner.data[start..start + wpl]
    }

    /// Paint every pixel of `region` with `pixel`.
    ///
    /// Empty regions are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if the region leaves the grid.
    pub fn fill_region(&mut self, region: &Region, pixel: Pixel) -> Result<()> {
        if !region.fits_within(self.width(), self.height()) {
            return Err(Error::RegionOutOfBounds {
                left: region.left,
                right: region.right,
                top: region.top,
                bottom: region.bottom,
                width: self.width(),
                height: self.height(),
            });
        }
        for y in region.rows() {
            for x in region.columns() {
                self.set_pixel_unchecked(x as u32, y as u32, pixel);
            }
        }
        Ok(())
    }

    /// Reset every pixel to background.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }

    fn load_raw_row(&mut self, y: u32, row: &[u8]) -> Result<()> {
        for (x, &value) in row.iter().enumerate() {
            let x = x as u32;
            let pixel = Pixel::from_raw(value).ok_or(Error::InvalidPixelValue { x, y, value })?;
            self.set_pixel_unchecked(x, y, pixel);
        }
        Ok(())
    }
}

impl From<PixelGridMut> for PixelGrid {
    fn from(grid: PixelGridMut) -> Self {
        PixelGrid {
            inner: Arc::new(grid.inner),
        }
    }
}
