//! sigzone-test - Regression test framework for sigzone
//!
//! This crate provides a small regression test harness supporting two
//! modes:
//!
//! - **Compare**: Check computed values against expected values (default)
//! - **Display**: Same checks, plus every compared value is echoed to stderr
//!
//! It also builds the synthetic binary grids the regression tests run on, so
//! no test depends on image files.
//!
//! # Usage
//!
//! ```ignore
//! use sigzone_test::{RegParams, blank_grid};
//!
//! let mut rp = RegParams::new("zoning");
//! rp.compare_values(64.0, zones.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    blank_grid, checkerboard_grid, grid_from_ascii, ink_grid, vertical_line_grid,
};
pub use params::{RegParams, RegTestMode};
