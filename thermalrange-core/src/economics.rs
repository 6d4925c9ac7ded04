//! Cost-per-coverage and thermal vs. visible comparison
//!
//! Both helpers sit on top of the profile builder and are what the
//! proposal workflow quotes to customers, so their rounding and wording
//! must stay exactly as published.

use core::fmt::{self, Write};

use crate::{
    config::JohnsonCriteria,
    constants::planning::THERMAL_ADVANTAGE_RATIO,
    errors::RangeResult,
    optics::{OpticalSpec, TargetClass},
    profile::{build_profile_with, coverage_area_sq_ft, DetectionProfile},
    units::{meters_to_feet, sq_feet_to_sq_meters},
    validation,
};

/// Price per unit of detection range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoverageCost {
    /// Price per meter of detection range, rounded
    pub cost_per_meter: u64,
    /// Price per foot of detection range, rounded
    pub cost_per_foot: u64,
    /// Half-disc coverage area at detection range (sq m), rounded
    pub coverage_area_sq_meters: u64,
}

/// Price a camera by its detection range.
///
/// A range of zero (or one too short to register a whole foot) has nothing
/// to divide by and fails with `DivisionGuard`.
pub fn cost_per_coverage(price: f64, detection_range_m: f64) -> RangeResult<CoverageCost> {
    let range = validation::check_finite("detection_range_m", detection_range_m)?;
    let range = validation::check_denominator("cost_per_meter", range)?;
    let price = validation::check_positive("price", price)?;

    let feet = meters_to_feet(range)?;
    let feet_divisor = validation::check_denominator("cost_per_foot", feet as f64)?;

    let area_sq_ft = coverage_area_sq_ft(feet)?;

    Ok(CoverageCost {
        cost_per_meter: validation::check_u64("cost_per_meter", libm::round(price / range))?,
        cost_per_foot: validation::check_u64("cost_per_foot", libm::round(price / feet_divisor))?,
        coverage_area_sq_meters: validation::check_u64(
            "coverage_area_sq_meters",
            libm::round(sq_feet_to_sq_meters(area_sq_ft as f64)),
        )?,
    })
}

/// How thermal detection compares with an IR-illuminated visible camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalAdvantage {
    /// Thermal detection range as a percentage of the illuminator range
    Better {
        /// `round(thermal / illuminator × 100)`
        percent: u32,
    },
    /// Thermal is less than twice the illuminator range
    Similar,
}

impl fmt::Display for ThermalAdvantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThermalAdvantage::Better { percent } => {
                write!(f, "{}% better night detection", percent)
            }
            ThermalAdvantage::Similar => f.write_str("Similar performance"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ThermalAdvantage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display string for a comparison verdict
pub type AdvantageText = heapless::String<48>;

impl ThermalAdvantage {
    /// Verdict as a bounded string
    pub fn text(&self) -> AdvantageText {
        let mut text = AdvantageText::new();
        // Longest verdict is a u32 plus 25 literal bytes
        let _ = write!(text, "{}", self);
        text
    }
}

/// Thermal human profile against a visible camera's illuminator range
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ComparisonResult {
    /// Thermal profile for a human target
    pub thermal_profile: DetectionProfile,
    /// Range a visible camera sees at night, i.e. the illuminator range (m)
    #[cfg_attr(feature = "serde", serde(rename = "visibleNightRangeM"))]
    pub visible_night_range_m: f64,
    /// Verdict
    pub thermal_advantage: ThermalAdvantage,
}

/// Compare with the standard criteria
pub fn compare_thermal_vs_visible(
    spec: &OpticalSpec,
    ir_illuminator_range_m: f64,
) -> RangeResult<ComparisonResult> {
    compare_thermal_vs_visible_with(spec, ir_illuminator_range_m, &JohnsonCriteria::default())
}

/// Compare with custom criteria
pub fn compare_thermal_vs_visible_with(
    spec: &OpticalSpec,
    ir_illuminator_range_m: f64,
    criteria: &JohnsonCriteria,
) -> RangeResult<ComparisonResult> {
    let illuminator = validation::check_finite("ir_illuminator_range_m", ir_illuminator_range_m)?;
    let illuminator = validation::check_denominator("thermal_advantage", illuminator)?;

    let thermal_profile = build_profile_with(spec, TargetClass::Human, criteria)?;
    let thermal = thermal_profile.per_level.detection.meters as f64;

    let thermal_advantage = if thermal > illuminator * THERMAL_ADVANTAGE_RATIO {
        ThermalAdvantage::Better {
            percent: validation::check_u32(
                "thermal_advantage_percent",
                libm::round(thermal / illuminator * 100.0),
            )?,
        }
    } else {
        ThermalAdvantage::Similar
    };

    Ok(ComparisonResult {
        thermal_profile,
        visible_night_range_m: illuminator,
        thermal_advantage,
    })
}
