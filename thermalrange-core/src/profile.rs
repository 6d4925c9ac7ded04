//! Detection profile builder
//!
//! A profile is the forward range calculation run at all three Johnson
//! levels for one target class, plus the area the camera watches at
//! detection range.
//!
//! ## Coverage Area
//!
//! A fixed camera is modelled as watching a half disc whose radius is the
//! detection range in feet:
//!
//! ```text
//! area_sqft = round(π × detection_ft² / 2)
//! ```
//!
//! Recognition and identification ranges do not contribute to the area.

use core::f64::consts::PI;
use core::fmt::{self, Write};

use crate::{
    config::JohnsonCriteria,
    errors::RangeResult,
    optics::{DetectionLevel, OpticalSpec, TargetClass},
    range::{compute_range, RangeEstimate},
    validation,
};

/// Range estimates at each detection level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRanges {
    /// Something is there
    pub detection: RangeEstimate,
    /// What kind of thing it is
    pub recognition: RangeEstimate,
    /// Which one it is
    pub identification: RangeEstimate,
}

impl LevelRanges {
    /// Estimate for one level
    pub fn get(&self, level: DetectionLevel) -> RangeEstimate {
        match level {
            DetectionLevel::Detection => self.detection,
            DetectionLevel::Recognition => self.recognition,
            DetectionLevel::Identification => self.identification,
        }
    }

    /// `(level, estimate)` pairs, loosest level first
    pub fn iter(&self) -> impl Iterator<Item = (DetectionLevel, RangeEstimate)> + '_ {
        DetectionLevel::ALL.into_iter().map(move |level| (level, self.get(level)))
    }
}

/// Ranges for one optical spec against one target class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DetectionProfile {
    /// Target class the ranges apply to
    pub target: TargetClass,
    /// Range at each detection level
    pub per_level: LevelRanges,
    /// Half-disc area watched at detection range (sq ft)
    pub coverage_area_sq_ft: u64,
}

/// Profiles for every target class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetProfiles {
    /// Standing person
    pub human: DetectionProfile,
    /// Vehicle
    pub vehicle: DetectionProfile,
}

impl TargetProfiles {
    /// Profile for one target class
    pub fn get(&self, target: TargetClass) -> &DetectionProfile {
        match target {
            TargetClass::Human => &self.human,
            TargetClass::Vehicle => &self.vehicle,
        }
    }
}

/// Half-disc area in square feet for a detection radius in feet
pub fn coverage_area_sq_ft(detection_feet: u32) -> RangeResult<u64> {
    let radius = detection_feet as f64;
    validation::check_u64("coverage_area_sq_ft", libm::round(PI * radius * radius / 2.0))
}

/// Build a profile with the standard Johnson Criteria
pub fn build_profile(spec: &OpticalSpec, target: TargetClass) -> RangeResult<DetectionProfile> {
    build_profile_with(spec, target, &JohnsonCriteria::default())
}

/// Build a profile with custom criteria
pub fn build_profile_with(
    spec: &OpticalSpec,
    target: TargetClass,
    criteria: &JohnsonCriteria,
) -> RangeResult<DetectionProfile> {
    let dimension = target.critical_dimension_m();
    let estimate = |level: DetectionLevel| -> RangeResult<RangeEstimate> {
        compute_range(dimension, spec, criteria.pixels(level)).and_then(RangeEstimate::from_meters)
    };

    let per_level = LevelRanges {
        detection: estimate(DetectionLevel::Detection)?,
        recognition: estimate(DetectionLevel::Recognition)?,
        identification: estimate(DetectionLevel::Identification)?,
    };
    let coverage_area_sq_ft = coverage_area_sq_ft(per_level.detection.feet)?;

    log_debug!(
        "Profile {} @ {}mm/{}um/{}px: D={}m R={}m I={}m",
        target,
        spec.focal_length_mm(),
        spec.pixel_pitch_um(),
        spec.horizontal_resolution_px(),
        per_level.detection.meters,
        per_level.recognition.meters,
        per_level.identification.meters
    );

    Ok(DetectionProfile {
        target,
        per_level,
        coverage_area_sq_ft,
    })
}

/// Build profiles for every target class with the standard criteria
pub fn build_all_profiles(spec: &OpticalSpec) -> RangeResult<TargetProfiles> {
    build_all_profiles_with(spec, &JohnsonCriteria::default())
}

/// Build profiles for every target class with custom criteria
pub fn build_all_profiles_with(
    spec: &OpticalSpec,
    criteria: &JohnsonCriteria,
) -> RangeResult<TargetProfiles> {
    Ok(TargetProfiles {
        human: build_profile_with(spec, TargetClass::Human, criteria)?,
        vehicle: build_profile_with(spec, TargetClass::Vehicle, criteria)?,
    })
}

/// Display string for a range estimate
pub type RangeLabel = heapless::String<32>;

/// Format as `"1,234m (4,049ft)"`
pub fn format_detection_range(estimate: RangeEstimate) -> RangeLabel {
    let mut label = RangeLabel::new();
    // Two grouped u32 values plus literals need at most 32 bytes
    let _ = write!(
        label,
        "{}m ({}ft)",
        Grouped(estimate.meters),
        Grouped(estimate.feet)
    );
    label
}

/// Integer with comma thousands separators
struct Grouped(u32);

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = [0u8; 10];
        let mut n = self.0;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            n /= 10;
            len += 1;
            if n == 0 {
                break;
            }
        }
        for i in (0..len).rev() {
            f.write_char(digits[i] as char)?;
            if i > 0 && i % 3 == 0 {
                f.write_char(',')?;
            }
        }
        Ok(())
    }
}
