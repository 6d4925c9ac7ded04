//! Perimeter coverage planner
//!
//! Cameras are strung along a boundary; each one covers the diameter of its
//! detection circle, minus the overlap shared with its neighbours.
//!
//! ```text
//! raw_ft      = detection_ft × 2 × (1 - overlap% / 100)
//! cameras     = ceil(perimeter_ft / raw_ft)
//! per_camera  = round(raw_ft)          (display)
//! total       = cameras × raw_ft       (unrounded)
//! ```
//!
//! `coverage_per_camera_ft` is rounded for display while the camera count
//! and total are computed from the unrounded figure. Downstream quotes are
//! compared against this exact behaviour, so keep the two precisions apart.

use crate::{
    constants::planning::MAX_OVERLAP_PERCENT,
    errors::RangeResult,
    validation,
};

pub use crate::constants::planning::DEFAULT_OVERLAP_PERCENT;

/// Camera count and spacing for a perimeter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoveragePlan {
    /// Cameras needed to cover the whole perimeter (at least 1)
    pub cameras_required: u32,
    /// Effective coverage per camera, rounded (ft)
    pub coverage_per_camera_ft: u32,
    /// Cameras × unrounded per-camera coverage (ft)
    pub total_coverage_ft: f64,
}

/// Plan cameras for a perimeter.
///
/// `overlap_percent` must lie in `[0, 100)`; perimeter and detection range
/// must be positive. Use [`DEFAULT_OVERLAP_PERCENT`] for the standard 20%.
pub fn plan_perimeter_coverage(
    perimeter_ft: f64,
    detection_range_ft: f64,
    overlap_percent: f64,
) -> RangeResult<CoveragePlan> {
    let perimeter = validation::check_positive("perimeter_ft", perimeter_ft)?;
    let range = validation::check_positive("detection_range_ft", detection_range_ft)?;
    let overlap =
        validation::check_range("overlap_percent", overlap_percent, 0.0, MAX_OVERLAP_PERCENT)?;

    let raw_coverage = range * 2.0 * (1.0 - overlap / 100.0);
    let cameras_required =
        validation::check_u32("cameras_required", libm::ceil(perimeter / raw_coverage))?;

    let plan = CoveragePlan {
        cameras_required,
        coverage_per_camera_ft: validation::check_u32(
            "coverage_per_camera_ft",
            libm::round(raw_coverage),
        )?,
        total_coverage_ft: cameras_required as f64 * raw_coverage,
    };

    log_debug!(
        "Perimeter {}ft @ {}ft range, {}% overlap: {} cameras",
        perimeter,
        range,
        overlap,
        plan.cameras_required
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RangeError;

    #[test]
    fn standard_overlap_plan() {
        let plan = plan_perimeter_coverage(1000.0, 300.0, DEFAULT_OVERLAP_PERCENT).unwrap();
        assert_eq!(plan.cameras_required, 3);
        assert_eq!(plan.coverage_per_camera_ft, 480);
        assert!((plan.total_coverage_ft - 1440.0).abs() < 1e-9);
    }

    #[test]
    fn total_uses_unrounded_coverage() {
        // raw = 100.3 × 2 × 0.8 = 160.48, displayed as 160
        let plan = plan_perimeter_coverage(1000.0, 100.3, 20.0).unwrap();
        assert_eq!(plan.coverage_per_camera_ft, 160);
        assert_eq!(plan.cameras_required, 7);
        assert!((plan.total_coverage_ft - 7.0 * 160.48).abs() < 1e-9);
        assert!(plan.total_coverage_ft != 7.0 * 160.0);
    }

    #[test]
    fn short_perimeter_needs_one_camera() {
        let plan = plan_perimeter_coverage(10.0, 300.0, 20.0).unwrap();
        assert_eq!(plan.cameras_required, 1);
    }

    #[test]
    fn exact_fit_does_not_round_up() {
        // raw = 250 × 2 × 1.0 = 500 → exactly 2 cameras
        let plan = plan_perimeter_coverage(1000.0, 250.0, 0.0).unwrap();
        assert_eq!(plan.cameras_required, 2);
    }

    #[test]
    fn camera_count_beyond_u32_rejected() {
        // 1e15 / (0.001 × 2 × 0.8) = 6.25e17 cameras
        assert!(matches!(
            plan_perimeter_coverage(1e15, 0.001, 20.0),
            Err(RangeError::InvalidSpecification { field: "cameras_required", .. })
        ));
    }

    #[test]
    fn accepted_plans_cover_the_perimeter() {
        let plan = plan_perimeter_coverage(1e12, 300.0, 20.0).unwrap();
        assert!(plan.total_coverage_ft >= 1e12);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(matches!(
            plan_perimeter_coverage(0.0, 300.0, 20.0),
            Err(RangeError::InvalidSpecification { field: "perimeter_ft", .. })
        ));
        assert!(matches!(
            plan_perimeter_coverage(1000.0, 0.0, 20.0),
            Err(RangeError::InvalidSpecification { field: "detection_range_ft", .. })
        ));
        assert!(matches!(
            plan_perimeter_coverage(1000.0, 300.0, 100.0),
            Err(RangeError::InvalidSpecification { field: "overlap_percent", .. })
        ));
        assert!(plan_perimeter_coverage(1000.0, 300.0, -5.0).is_err());
    }
}
