//! Samples and sample sets
//!
//! A [`SampleFeatures`] is one signature image run through zoning and
//! per-zone feature extraction. A [`SampleSet`] collects several samples
//! zoned with the same options and answers stability queries over them.

use crate::error::{RecogError, RecogResult};
use crate::features::{FeatureVector, extract_zone_features};
use crate::stability::{StabilityMask, StabilityRule, ZoneFeature, compare_features};
use rayon::prelude::*;
use sigzone_core::{PixelGrid, Region};
use sigzone_region::{ZoneLayout, ZoningOptions, zone_grid};
use tracing::{debug, trace};

/// Zones and per-zone features of one sample
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFeatures {
    layout: ZoneLayout,
    features: Vec<FeatureVector>,
}

impl SampleFeatures {
    /// Zone `grid` and measure every zone.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Region`] for invalid zoning options.
    pub fn extract(grid: &PixelGrid, options: &ZoningOptions) -> RecogResult<Self> {
        let layout = zone_grid(grid, options)?;
        let features = layout
            .iter()
            .enumerate()
            .map(|(i, zone)| -> RecogResult<FeatureVector> {
                let fv = extract_zone_features(grid, zone)?;
                trace!(
                    zone = i,
                    region = %zone,
                    transitions = fv.transitions,
                    skew = fv.skew,
                    slant = fv.slant,
                    "zone features"
                );
                Ok(fv)
            })
            .collect::<RecogResult<Vec<_>>>()?;

        debug!(
            zones = features.len(),
            transitions = features.iter().map(|f| u64::from(f.transitions)).sum::<u64>(),
            "extracted sample features"
        );
        Ok(Self { layout, features })
    }

    /// Number of zones
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Zones in layout order
    pub fn zones(&self) -> &[Region] {
        self.layout.zones()
    }

    /// Feature vectors, aligned with [`zones`](Self::zones)
    pub fn features(&self) -> &[FeatureVector] {
        &self.features
    }

    pub fn centroids(&self) -> Vec<(f64, f64)> {
        self.features.iter().map(|f| f.centroid).collect()
    }

    pub fn transitions(&self) -> Vec<u32> {
        self.features.iter().map(|f| f.transitions).collect()
    }

    pub fn aspect_ratios(&self) -> Vec<f64> {
        self.features.iter().map(|f| f.aspect_ratio).collect()
    }

    pub fn skews(&self) -> Vec<f64> {
        self.features.iter().map(|f| f.skew).collect()
    }

    pub fn slants(&self) -> Vec<f64> {
        self.features.iter().map(|f| f.slant).collect()
    }

    /// One feature of every zone, as `f64`
    pub fn values(&self, feature: ZoneFeature) -> Vec<f64> {
        self.features.iter().map(|f| feature.value(f)).collect()
    }
}

impl AsRef<[FeatureVector]> for SampleFeatures {
    fn as_ref(&self) -> &[FeatureVector] {
        &self.features
    }
}

/// Samples of one signer, zoned with the same options
#[derive(Debug, Clone)]
pub struct SampleSet {
    options: ZoningOptions,
    samples: Vec<SampleFeatures>,
}

impl SampleSet {
    /// Create an empty set
    pub fn new(options: ZoningOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            samples: Vec::new(),
        })
    }

    /// Extract features from every grid, in order.
    pub fn from_grids(grids: &[PixelGrid], options: ZoningOptions) -> RecogResult<Self> {
        let mut set = Self::new(options)?;
        for grid in grids {
            set.push_grid(grid)?;
        }
        Ok(set)
    }

    /// Like [`from_grids`](Self::from_grids), extracting samples in parallel.
    ///
    /// Sample order follows `grids` and the result is identical to the
    /// sequential version.
    pub fn from_grids_parallel(grids: &[PixelGrid], options: ZoningOptions) -> RecogResult<Self> {
        options.validate()?;
        let samples = grids
            .par_iter()
            .map(|grid| SampleFeatures::extract(grid, &options))
            .collect::<RecogResult<Vec<_>>>()?;
        debug!(samples = samples.len(), "extracted sample set in parallel");
        Ok(Self { options, samples })
    }

    pub fn options(&self) -> &ZoningOptions {
        &self.options
    }

    /// Extract features from `grid` and append them
    pub fn push_grid(&mut self, grid: &PixelGrid) -> RecogResult<()> {
        let sample = SampleFeatures::extract(grid, &self.options)?;
        self.samples.push(sample);
        Ok(())
    }

    /// Append an already extracted sample.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::MisalignedSamples`] if its zone count differs
    /// from the set's.
    pub fn push(&mut self, sample: SampleFeatures) -> RecogResult<()> {
        let expected = self.options.zone_count();
        if sample.len() != expected {
            return Err(RecogError::MisalignedSamples {
                sample: self.samples.len(),
                expected,
                actual: sample.len(),
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[SampleFeatures] {
        &self.samples
    }

    /// Transition counts of every sample
    pub fn transitions(&self) -> Vec<Vec<u32>> {
        self.samples.iter().map(SampleFeatures::transitions).collect()
    }

    /// Zones whose transition count matches sample 0 in every sample
    pub fn stable_transition_zones(&self) -> RecogResult<StabilityMask> {
        self.stability_mask(ZoneFeature::Transitions, StabilityRule::ExactEquality)
    }

    /// Zones whose `feature` agrees with sample 0 under `rule` in every sample
    pub fn stability_mask(
        &self,
        feature: ZoneFeature,
        rule: StabilityRule,
    ) -> RecogResult<StabilityMask> {
        compare_features(&self.samples, feature, rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(picture: &str) -> PixelGrid {
        PixelGrid::from_ascii(picture).unwrap()
    }

    #[test]
    fn test_extract_depth_one() {
        let g = grid(
            "#...
             .#..
             ..#.
             ...#",
        );
        // centroid (1.5, 1.5) -> split at (1, 1)
        let sample = SampleFeatures::extract(&g, &ZoningOptions::new().with_depth(1)).unwrap();
        assert_eq!(sample.len(), 4);
        assert_eq!(sample.zones()[0], Region::new_unchecked(0, 1, 0, 1));
        assert_eq!(sample.centroids()[0], (0.5, 0.5));
        assert_eq!(sample.transitions(), vec![1, 0, 0, 1]);
        assert_eq!(sample.aspect_ratios(), vec![1.0; 4]);
        assert!((sample.skews()[0] - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_values_match_accessors() {
        let g = grid(
            "##..
             ##..
             ..#.",
        );
        let sample = SampleFeatures::extract(&g, &ZoningOptions::new().with_depth(1)).unwrap();
        assert_eq!(sample.values(ZoneFeature::Slant), sample.slants());
        assert_eq!(sample.values(ZoneFeature::Skew), sample.skews());
        let xs: Vec<f64> = sample.centroids().iter().map(|c| c.0).collect();
        assert_eq!(sample.values(ZoneFeature::CentroidX), xs);
    }

    #[test]
    fn test_push_rejects_other_depth() {
        let g = grid(
            "#.
             .#",
        );
        let mut set = SampleSet::new(ZoningOptions::new().with_depth(1)).unwrap();
        set.push_grid(&g).unwrap();
        let deeper = SampleFeatures::extract(&g, &ZoningOptions::new().with_depth(2)).unwrap();
        assert!(matches!(
            set.push(deeper),
            Err(RecogError::MisalignedSamples {
                sample: 1,
                expected: 4,
                actual: 16
            })
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_set_has_no_mask() {
        let set = SampleSet::new(ZoningOptions::default()).unwrap();
        assert!(matches!(
            set.stable_transition_zones(),
            Err(RecogError::EmptySampleSet)
        ));
    }

    #[test]
    fn test_invalid_options() {
        assert!(SampleSet::new(ZoningOptions::new().with_depth(9)).is_err());
        let g = grid("#");
        assert!(SampleSet::from_grids_parallel(&[g], ZoningOptions::new().with_depth(9)).is_err());
    }
}
