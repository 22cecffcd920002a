//! Synthetic binary grids for regression tests

use crate::error::{TestError, TestResult};
use sigzone_core::{Pixel, PixelGrid, Region};

fn fixture<T>(name: &'static str, r: sigzone_core::Result<T>) -> TestResult<T> {
    r.map_err(|source| TestError::Fixture { name, source })
}

/// All-background grid
pub fn blank_grid(width: u32, height: u32) -> TestResult<PixelGrid> {
    fixture("blank", PixelGrid::new(width, height))
}

/// All-ink grid
pub fn ink_grid(width: u32, height: u32) -> TestResult<PixelGrid> {
    let mut gm = fixture("ink", PixelGrid::new(width, height))?.to_mut();
    fixture(
        "ink",
        gm.fill_region(&Region::full(width, height), Pixel::Ink),
    )?;
    Ok(gm.into())
}

/// Grid from an ASCII picture (`#` = ink, `.` = background)
pub fn grid_from_ascii(picture: &str) -> TestResult<PixelGrid> {
    fixture("ascii", PixelGrid::from_ascii(picture))
}

/// Blank grid with a 1-pixel-wide vertical ink stroke in column `x`
/// covering rows `top..top + len`.
pub fn vertical_line_grid(
    width: u32,
    height: u32,
    x: u32,
    top: u32,
    len: u32,
) -> TestResult<PixelGrid> {
    let mut gm = fixture("vertical line", PixelGrid::new(width, height))?.to_mut();
    let stroke = fixture(
        "vertical line",
        Region::new(x as i32, x as i32, top as i32, (top + len) as i32 - 1),
    )?;
    fixture("vertical line", gm.fill_region(&stroke, Pixel::Ink))?;
    Ok(gm.into())
}

/// Grid with ink wherever `(x + y)` is even
pub fn checkerboard_grid(width: u32, height: u32) -> TestResult<PixelGrid> {
    let mut gm = fixture("checkerboard", PixelGrid::new(width, height))?.to_mut();
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                gm.set_pixel_unchecked(x, y, Pixel::Ink);
            }
        }
    }
    Ok(gm.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_line_grid() {
        let grid = vertical_line_grid(64, 64, 5, 10, 10).unwrap();
        let bounds = grid.ink_bounds().to_region().unwrap();
        assert_eq!(bounds, Region::new(5, 5, 10, 19).unwrap());
    }

    #[test]
    fn test_checkerboard_grid() {
        let grid = checkerboard_grid(4, 4).unwrap();
        assert!(grid.is_ink(0, 0));
        assert!(!grid.is_ink(1, 0));
        assert_eq!(grid.ink_count(&grid.bounds()).unwrap(), 8);
    }

    #[test]
    fn test_zero_length_line_is_rejected() {
        assert!(vertical_line_grid(8, 8, 1, 2, 0).is_err());
    }
}
