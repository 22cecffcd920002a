//! Pixel access for binary grids
//!
//! Checked accessors return `None` / an error for out-of-range coordinates;
//! the `_unchecked` variants index directly and panic when out of range.
//! Scanning loops validate their region once and then use the unchecked
//! forms.

use super::{Pixel, PixelGrid, PixelGridMut};
use crate::error::{Error, Result};

impl PixelGrid {
    /// Get a pixel, or `None` if `(x, y)` is outside the grid.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel without bounds checking against the grid width.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        if self.is_ink(x, y) {
            Pixel::Ink
        } else {
            Pixel::Background
        }
    }

    /// Check whether `(x, y)` holds ink.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[inline]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        get_data_bit(self.row_data(y), x) != 0
    }
}

impl PixelGridMut {
    /// Get a pixel, or `None` if `(x, y)` is outside the grid.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let wpl = self.inner.wpl;
        let start = (y * wpl) as usize;
        let line = &self.inner.data[start..start + wpl as usize];
        Some(if get_data_bit(line, x) != 0 {
            Pixel::Ink
        } else {
            Pixel::Background
        })
    }

    /// Set a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if `(x, y)` is outside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set a pixel without bounds checking against the grid width.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        let line = self.row_data_mut(y);
        match pixel {
            Pixel::Ink => set_data_bit(line, x),
            Pixel::Background => clear_data_bit(line, x),
        }
    }
}

/// Get the bit at column `x` of a packed row.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

/// Set the bit at column `x` of a packed row.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] |= 0x8000_0000 >> (x & 31);
}

/// Clear the bit at column `x` of a packed row.
#[inline]
pub fn clear_data_bit(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] &= !(0x8000_0000 >> (x & 31));
}
