//! Per-zone features
//!
//! Five independent measurements are taken on every zone:
//!
//! - **Centroid**: mean position of the zone's ink pixels
//! - **Transition count**: ink-to-background changes in a row-major scan
//! - **Aspect ratio**: zone width over zone height
//! - **Skew angle**: tilt of the least-squares line through the ink pixels
//! - **Slant angle**: mean inclination of the vertical ink runs
//!
//! None of them fail on an ink-free or empty zone; each has a documented
//! default instead. They do fail on a non-empty zone that leaves the grid.

use crate::error::RecogResult;
use sigzone_core::{Error, PixelGrid, Region};

/// Features of one zone of one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Ink centroid `(x, y)`; `(0.0, 0.0)` for an ink-free zone
    pub centroid: (f64, f64),
    /// Ink-to-background transitions
    pub transitions: u32,
    /// Width / height; `f64::INFINITY` for a zero-height zone
    pub aspect_ratio: f64,
    /// Skew in degrees
    pub skew: f64,
    /// Slant in degrees
    pub slant: f64,
}

/// Compute all features of `region`.
///
/// # Errors
///
/// Returns [`crate::RecogError::Core`] if a non-empty region leaves the grid.
pub fn extract_zone_features(grid: &PixelGrid, region: &Region) -> RecogResult<FeatureVector> {
    Ok(FeatureVector {
        centroid: grid.centroid(region)?,
        transitions: count_transitions(grid, region)?,
        aspect_ratio: aspect_ratio(region),
        skew: skew_angle(grid, region)?,
        slant: slant_angle(grid, region)?,
    })
}

/// Count ink-to-background transitions in a row-major scan of `region`.
///
/// Rows are scanned top to bottom, each left to right, and the previous
/// pixel carries over from the end of one row to the start of the next; it
/// is seeded with the region's top-left pixel. A transition is counted each
/// time a background pixel follows an ink pixel.
///
/// Returns 0 for an empty region.
///
/// ```
/// use sigzone_core::PixelGrid;
/// use sigzone_recog::count_transitions;
///
/// let grid = PixelGrid::from_ascii("##..#.").unwrap();
/// assert_eq!(count_transitions(&grid, &grid.bounds()).unwrap(), 2);
/// ```
pub fn count_transitions(grid: &PixelGrid, region: &Region) -> RecogResult<u32> {
    grid.check_region(region)?;
    if region.is_empty() {
        return Ok(0);
    }
    let mut prev = grid.is_ink(region.left as u32, region.top as u32);
    let mut transitions = 0u32;
    for y in region.rows() {
        for x in region.columns() {
            let curr = grid.is_ink(x as u32, y as u32);
            if prev && !curr {
                transitions += 1;
            }
            prev = curr;
        }
    }
    Ok(transitions)
}

/// Width-to-height ratio of `region`.
///
/// Returns `f64::INFINITY` for a region of zero height. Empty regions have
/// their extents clamped to zero, so the ratio is never negative.
pub fn aspect_ratio(region: &Region) -> f64 {
    region.aspect_ratio()
}

/// Skew of the ink in `region`, in degrees.
///
/// Fits `y = slope * x + intercept` through the ink pixel coordinates by
/// least squares and returns `atan(slope)`. Since rows grow downwards, a
/// stroke rising to the right has a negative skew.
///
/// Returns 0.0 with fewer than two ink pixels, and 90.0 when all ink pixels
/// share one column.
pub fn skew_angle(grid: &PixelGrid, region: &Region) -> RecogResult<f64> {
    let pts = grid.ink_points(region)?;
    if pts.len() < 2 {
        return Ok(0.0);
    }
    match pts.linear_lsf() {
        Ok((slope, _)) => Ok(slope.atan().to_degrees()),
        Err(Error::DegenerateFit(_)) => Ok(90.0),
        Err(e) => Err(e.into()),
    }
}

/// Slant of the vertical ink runs in `region`, in degrees.
///
/// For every column `x`, each maximal vertical run of ink that is followed
/// by background inside the region contributes
/// `atan(run_length / (x - left + 1))`. Runs still open at the bottom row
/// are not counted. Returns the mean angle, or 0.0 if there are no runs.
pub fn slant_angle(grid: &PixelGrid, region: &Region) -> RecogResult<f64> {
    grid.check_region(region)?;
    let mut sum = 0f64;
    let mut n = 0u32;
    for x in region.columns() {
        let offset = f64::from(x - region.left + 1);
        let mut start: Option<i32> = None;
        for y in region.rows() {
            if grid.is_ink(x as u32, y as u32) {
                start.get_or_insert(y);
            } else if let Some(s) = start.take() {
                sum += (f64::from(y - s) / offset).atan().to_degrees();
                n += 1;
            }
        }
    }
    if n == 0 {
        return Ok(0.0);
    }
    Ok(sum / f64::from(n))
}
