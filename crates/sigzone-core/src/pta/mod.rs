//! Pta - Point arrays
//!
//! Arrays of floating-point coordinate pairs, used to collect ink pixel
//! coordinates for regression.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y vectors (SoA layout) so the
//! coordinate slices can be summed directly.

mod lsf;

/// Array of points.
///
/// Stores 2D points as parallel x/y coordinate vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pta {
    /// X coordinates
    x: Vec<f64>,
    /// Y coordinates
    y: Vec<f64>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Add a point.
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Get X coordinates as a slice.
    pub fn x_coords(&self) -> &[f64] {
        &self.x
    }

    /// Get Y coordinates as a slice.
    pub fn y_coords(&self) -> &[f64] {
        &self.y
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Mean of all points, or `None` if empty.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let sx: f64 = self.x.iter().sum();
        let sy: f64 = self.y.iter().sum();
        Some((sx / n, sy / n))
    }
}

impl FromIterator<(f64, f64)> for Pta {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut pta = Pta::new();
        for (x, y) in iter {
            pta.push(x, y);
        }
        pta
    }
}
