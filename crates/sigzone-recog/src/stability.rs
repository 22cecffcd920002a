//! Zone stability across samples
//!
//! Several samples of the same signature are zoned and measured the same
//! way, so zone `i` of every sample covers the "same" part of the
//! signature. A zone is stable when one of its features agrees with the
//! first sample in every other sample.

use crate::error::{RecogError, RecogResult};
use crate::features::FeatureVector;
use tracing::debug;

/// How two feature values are compared
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StabilityRule {
    /// Values must be exactly equal
    #[default]
    ExactEquality,
    /// Values may differ by at most the given amount
    ToleranceBand(f64),
}

impl StabilityRule {
    /// Validate the rule
    pub fn validate(&self) -> RecogResult<()> {
        match *self {
            StabilityRule::ToleranceBand(t) if !(t.is_finite() && t >= 0.0) => {
                Err(RecogError::InvalidParameter(format!(
                    "tolerance must be finite and non-negative, got {t}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Whether `value` agrees with `reference` under this rule.
    ///
    /// Equal values always agree, including two infinite aspect ratios.
    pub fn holds(&self, reference: f64, value: f64) -> bool {
        match *self {
            StabilityRule::ExactEquality => value == reference,
            StabilityRule::ToleranceBand(t) => {
                value == reference || (value - reference).abs() <= t
            }
        }
    }
}

/// Feature selected for a stability comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneFeature {
    Transitions,
    AspectRatio,
    Skew,
    Slant,
    CentroidX,
    CentroidY,
}

impl ZoneFeature {
    /// Read this feature out of a feature vector
    pub fn value(&self, fv: &FeatureVector) -> f64 {
        match self {
            ZoneFeature::Transitions => f64::from(fv.transitions),
            ZoneFeature::AspectRatio => fv.aspect_ratio,
            ZoneFeature::Skew => fv.skew,
            ZoneFeature::Slant => fv.slant,
            ZoneFeature::CentroidX => fv.centroid.0,
            ZoneFeature::CentroidY => fv.centroid.1,
        }
    }
}

/// Per-zone stability flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityMask {
    stable: Vec<bool>,
}

impl StabilityMask {
    /// Number of zones
    pub fn len(&self) -> usize {
        self.stable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stable.is_empty()
    }

    /// Whether zone `index` is stable; `false` for an out-of-range index
    pub fn is_stable(&self, index: usize) -> bool {
        self.stable.get(index).copied().unwrap_or(false)
    }

    /// Number of stable zones
    pub fn stable_count(&self) -> usize {
        self.stable.iter().filter(|&&s| s).count()
    }

    /// Indices of the stable zones, ascending
    pub fn stable_zones(&self) -> Vec<usize> {
        self.stable
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
            .collect()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.stable
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.stable.iter().copied()
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.stable
    }
}

/// Mark the zones whose transition count is identical in every sample.
///
/// `transitions[s][i]` is the count of zone `i` in sample `s`. Sample 0 is
/// the reference. A single sample yields an all-true mask.
///
/// # Errors
///
/// - [`RecogError::EmptySampleSet`] if there are no samples
/// - [`RecogError::MisalignedSamples`] if the samples differ in length
///
/// ```
/// use sigzone_recog::compare_transitions;
///
/// let mask = compare_transitions(&[vec![2u32, 0, 5], vec![2, 1, 5]]).unwrap();
/// assert_eq!(mask.as_slice(), &[true, false, true]);
/// ```
pub fn compare_transitions<S: AsRef<[u32]>>(transitions: &[S]) -> RecogResult<StabilityMask> {
    build_mask::<u32, _, _>(transitions, |reference, value| reference == value)
}

/// Mark the zones whose value agrees with sample 0 under `rule` in every
/// sample.
///
/// # Errors
///
/// - [`RecogError::InvalidParameter`] if the rule is invalid
/// - [`RecogError::EmptySampleSet`] if there are no samples
/// - [`RecogError::MisalignedSamples`] if the samples differ in length
pub fn compare_sequences<S: AsRef<[f64]>>(
    sequences: &[S],
    rule: StabilityRule,
) -> RecogResult<StabilityMask> {
    rule.validate()?;
    build_mask::<f64, _, _>(sequences, |reference, value| rule.holds(*reference, *value))
}

/// Like [`compare_sequences`] on one feature of per-sample feature vectors.
pub fn compare_features<S: AsRef<[FeatureVector]>>(
    samples: &[S],
    feature: ZoneFeature,
    rule: StabilityRule,
) -> RecogResult<StabilityMask> {
    rule.validate()?;
    build_mask::<FeatureVector, _, _>(samples, |reference, value| {
        rule.holds(feature.value(reference), feature.value(value))
    })
}

fn build_mask<T, S, F>(samples: &[S], agrees: F) -> RecogResult<StabilityMask>
where
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> bool,
{
    let Some((first, rest)) = samples.split_first() else {
        return Err(RecogError::EmptySampleSet);
    };
    let reference = first.as_ref();
    for (i, sample) in rest.iter().enumerate() {
        let actual = sample.as_ref().len();
        if actual != reference.len() {
            return Err(RecogError::MisalignedSamples {
                sample: i + 1,
                expected: reference.len(),
                actual,
            });
        }
    }

    let stable: Vec<bool> = reference
        .iter()
        .enumerate()
        .map(|(z, r)| rest.iter().all(|sample| agrees(r, &sample.as_ref()[z])))
        .collect();
    let mask = StabilityMask { stable };
    debug!(
        samples = samples.len(),
        zones = mask.len(),
        stable = mask.stable_count(),
        "compared zone stability"
    );
    Ok(mask)
}
