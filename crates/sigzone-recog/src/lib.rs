//! sigzone-recog - Zone features and stability analysis
//!
//! This crate turns zoned signature samples into comparable features:
//!
//! - **Zone features**: centroid, transition count, aspect ratio, skew and
//!   slant of every zone
//! - **Samples**: one grid zoned and measured, features aligned by zone index
//! - **Stability**: which zones keep the same feature value across all
//!   samples of a signer
//!
//! # Quick Start
//!
//! ```
//! use sigzone_core::PixelGrid;
//! use sigzone_recog::{SampleSet, ZoningOptions};
//!
//! let a = PixelGrid::from_ascii(
//!     "#...
//!      .#..
//!      ..#.
//!      ...#",
//! )
//! .unwrap();
//! let b = a.clone();
//!
//! let set = SampleSet::from_grids(&[a, b], ZoningOptions::new().with_depth(1)).unwrap();
//! let mask = set.stable_transition_zones().unwrap();
//! assert_eq!(mask.stable_count(), 4);
//! ```
//!
//! # Modules
//!
//! - [`features`]: Per-zone measurements
//! - [`sample`]: Samples and sample sets
//! - [`stability`]: Stability rules and masks

mod error;
pub mod features;
pub mod sample;
pub mod stability;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use features::{
    FeatureVector, aspect_ratio, count_transitions, extract_zone_features, skew_angle, slant_angle,
};
pub use sample::{SampleFeatures, SampleSet};
pub use stability::{
    StabilityMask, StabilityRule, ZoneFeature, compare_features, compare_sequences,
    compare_transitions,
};
pub use sigzone_region::{ZoneLayout, ZoningOptions, ZoningRoot};

// Re-export upstream crates for convenience
pub use sigzone_core;
pub use sigzone_region;
