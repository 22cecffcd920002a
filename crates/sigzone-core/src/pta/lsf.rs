//! Least-squares line fitting for Pta.

use crate::error::{Error, Result};
use crate::pta::Pta;

impl Pta {
    /// Linear least-squares fit `y = a * x + b`.
    ///
    /// Returns `(a, b)`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] with fewer than 2 points
    /// - [`Error::DegenerateFit`] when every point has the same x, so the
    ///   slope is unbounded
    pub fn linear_lsf(&self) -> Result<(f64, f64)> {
        let n = self.len();
        if n < 2 {
            return Err(Error::InvalidParameter("less than 2 pts found".to_string()));
        }
        let xa = self.x_coords();
        let ya = self.y_coords();

        let mut sx = 0f64;
        let mut sy = 0f64;
        let mut sxx = 0f64;
        let mut sxy = 0f64;
        for i in 0..n {
            sx += xa[i];
            sy += ya[i];
            sxx += xa[i] * xa[i];
            sxy += xa[i] * ya[i];
        }
        let factor = n as f64 * sxx - sx * sx;
        if factor == 0.0 {
            return Err(Error::DegenerateFit("all x values are identical"));
        }
        let inv = 1.0 / factor;
        let a = inv * (n as f64 * sxy - sx * sy);
        let b = inv * (sxx * sy - sx * sxy);
        Ok((a, b))
    }

    /// Evaluate the fitted line at every x coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`Pta::linear_lsf`].
    pub fn linear_lsf_fitted(&self) -> Result<Vec<f64>> {
        let (a, b) = self.linear_lsf()?;
        Ok(self.x_coords().iter().map(|&x| a * x + b).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let pta: Pta = (0..5).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
        let (a, b) = pta.linear_lsf().unwrap();
        assert!((a - 2.0).abs() < 1e-12);
        assert!((b - 1.0).abs() < 1e-12);
        let fitted = pta.linear_lsf_fitted().unwrap();
        assert!((fitted[4] - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_points() {
        let pta: Pta = [(1.0, 1.0)].into_iter().collect();
        assert!(matches!(pta.linear_lsf(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_vertical_points_are_degenerate() {
        let pta: Pta = [(3.0, 1.0), (3.0, 2.0), (3.0, 7.0)].into_iter().collect();
        assert!(matches!(pta.linear_lsf(), Err(Error::DegenerateFit(_))));
    }
}
