//! Zoning - Centroid-driven recursive quadrant decomposition
//!
//! A region is split into four quadrants at its ink centroid, truncated to
//! integer coordinates `(cx, cy)`:
//!
//! ```text
//! top-left     = (left ..= cx,     top ..= cy)
//! top-right    = (cx + 1 ..= right, top ..= cy)
//! bottom-left  = (left ..= cx,     cy + 1 ..= bottom)
//! bottom-right = (cx + 1 ..= right, cy + 1 ..= bottom)
//! ```
//!
//! and each quadrant is split again until the configured depth is reached.
//! Leaves are emitted depth-first in that quadrant order, so zone `i` of one
//! sample is comparable with zone `i` of another.
//!
//! # Ink-free regions
//!
//! An ink-free region reports its centroid as `(0, 0)`. The split is applied
//! at that point regardless of where the region lies, which can produce
//! empty quadrants, or quadrants reaching back towards the origin. These
//! zones are emitted unchanged; the layout then no longer tiles the grid,
//! but zone `i` still means the same traversal step in every sample.

use crate::error::{RegionError, RegionResult};
use sigzone_core::{Error, PixelGrid, Region};
use tracing::debug;

/// Default recursion depth (64 zones)
pub const DEFAULT_ZONING_DEPTH: u32 = 3;

/// Deepest supported recursion (65536 zones)
pub const MAX_ZONING_DEPTH: u32 = 8;

/// Where the recursion starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoningRoot {
    /// The whole grid, `(0, width - 1, 0, height - 1)`
    #[default]
    FullGrid,
    /// The tight bounding box of the ink; the whole grid if there is no ink
    InkBounds,
}

/// Options for zoning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoningOptions {
    /// Number of split levels; the layout has `4^depth` zones (default: 3)
    pub depth: u32,

    /// Starting region (default: [`ZoningRoot::FullGrid`])
    pub root: ZoningRoot,
}

impl Default for ZoningOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_ZONING_DEPTH,
            root: ZoningRoot::FullGrid,
        }
    }
}

impl ZoningOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion depth
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the starting region
    pub fn with_root(mut self, root: ZoningRoot) -> Self {
        self.root = root;
        self
    }

    /// Number of zones produced at this depth
    pub fn zone_count(&self) -> usize {
        1usize << (2 * self.depth)
    }

    /// Validate options
    pub fn validate(&self) -> RegionResult<()> {
        if self.depth > MAX_ZONING_DEPTH {
            return Err(RegionError::InvalidParameters(format!(
                "depth must be at most {MAX_ZONING_DEPTH}, got {}",
                self.depth
            )));
        }
        Ok(())
    }
}

/// One of the four children of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in emission order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];
}

/// Ordered zones of one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLayout {
    root: Region,
    depth: u32,
    zones: Vec<Region>,
}

impl ZoneLayout {
    /// Region the recursion started from
    pub fn root(&self) -> Region {
        self.root
    }

    /// Recursion depth used
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of zones
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Always false: a layout has at least one zone
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone by index
    pub fn get(&self, index: usize) -> Option<&Region> {
        self.zones.get(index)
    }

    /// Zones in layout order
    pub fn zones(&self) -> &[Region] {
        &self.zones
    }

    /// Iterate over zones in layout order
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.zones.iter()
    }

    /// Take ownership of the zone list
    pub fn into_zones(self) -> Vec<Region> {
        self.zones
    }
}

impl<'a> IntoIterator for &'a ZoneLayout {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

/// Split `grid` into `4^depth` zones.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for invalid options.
pub fn zone_grid(grid: &PixelGrid, options: &ZoningOptions) -> RegionResult<ZoneLayout> {
    options.validate()?;
    let root = match options.root {
        ZoningRoot::FullGrid => grid.bounds(),
        ZoningRoot::InkBounds => grid.ink_bounds().to_region().unwrap_or(grid.bounds()),
    };
    let zones = split_region(grid, &root, options.depth)?;
    debug!(
        zones = zones.len(),
        depth = options.depth,
        root = %root,
        "zoned {}x{} grid",
        grid.width(),
        grid.height()
    );
    Ok(ZoneLayout {
        root,
        depth: options.depth,
        zones,
    })
}

/// Recursively split `region` of `grid` to `depth` levels.
///
/// Returns exactly `4^depth` regions in depth-first
/// top-left / top-right / bottom-left / bottom-right order. With
/// `depth == 0` the result is `[region]`.
///
/// # Errors
///
/// - [`RegionError::InvalidParameters`] if `depth` exceeds
///   [`MAX_ZONING_DEPTH`]
/// - [`RegionError::Core`] if `region` is inverted or does not fit inside
///   the grid
pub fn split_region(grid: &PixelGrid, region: &Region, depth: u32) -> RegionResult<Vec<Region>> {
    if depth > MAX_ZONING_DEPTH {
        return Err(RegionError::InvalidParameters(format!(
            "depth must be at most {MAX_ZONING_DEPTH}, got {depth}"
        )));
    }
    if region.is_empty() {
        return Err(Error::InvertedRegion {
            left: region.left,
            right: region.right,
            top: region.top,
            bottom: region.bottom,
        }
        .into());
    }
    grid.check_region(region)?;
    let mut zones = Vec::with_capacity(1usize << (2 * depth));
    split_level(grid, *region, 0, depth, &mut zones)?;
    Ok(zones)
}

fn split_level(
    grid: &PixelGrid,
    region: Region,
    level: u32,
    depth: u32,
    zones: &mut Vec<Region>,
) -> RegionResult<()> {
    if level == depth {
        zones.push(region);
        return Ok(());
    }
    let (cx, cy) = grid.centroid(&region)?;
    // Truncation towards zero equals floor here: centroids are never negative
    for quadrant in region.quadrants(cx as i32, cy as i32) {
        split_level(grid, quadrant, level + 1, depth, zones)?;
    }
    Ok(())
}

/// Quadrant path from the root to zone `index` in a layout of `depth`
/// levels, outermost split first.
///
/// Returns `None` if `index >= 4^depth`.
pub fn zone_path(index: usize, depth: u32) -> Option<Vec<Quadrant>> {
    if depth > MAX_ZONING_DEPTH || index >= 1usize << (2 * depth) {
        return None;
    }
    let path = (0..depth)
        .rev()
        .map(|level| Quadrant::ALL[(index >> (2 * level)) & 3])
        .collect();
    Some(path)
}
