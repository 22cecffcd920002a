//! Extracting a region as its own grid

use super::{PixelGrid, get_data_bit, set_data_bit};
use crate::error::{Error, Result};
use crate::region::Region;

impl PixelGrid {
    /// Copy the pixels of `region` into a new grid.
    ///
    /// The result is `region.width()` x `region.height()` with the region's
    /// top-left pixel at the origin.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyRegion`] if the region covers no pixels
    /// - [`Error::RegionOutOfBounds`] if the region leaves the grid
    pub fn clip(&self, region: &Region) -> Result<PixelGrid> {
        if region.is_empty() {
            return Err(Error::EmptyRegion("cannot clip an empty region"));
        }
        self.check_region(region)?;

        let left = region.left as u32;
        let top = region.top as u32;
        let mut out = PixelGrid::new(region.width(), region.height())?.to_mut();
        for dy in 0..region.height() {
            let src = self.row_data(top + dy);
            let dst = out.row_data_mut(dy);
            for dx in 0..region.width() {
                if get_data_bit(src, left + dx) != 0 {
                    set_data_bit(dst, dx);
                }
            }
        }
        Ok(out.into())
    }
}
