//! Reference scenarios for the range engine
//!
//! Each test reproduces a figure quoted on a published range sheet or
//! proposal, end to end through the public API.

mod common;

use thermalrange_core::{
    build_all_profiles, build_profile, compare_thermal_vs_visible, cost_per_coverage,
    format_detection_range, plan_perimeter_coverage, recommend_lens, DetectionLevel,
    EngineConfig, OpticalSpec, RangeError, TargetClass, ThermalAdvantage, ThermalEngine,
};

use common::{assert_close, est, spec_320_18mm, spec_640_13mm, spec_640_75mm};

#[test]
fn test_human_profile_13mm() {
    let profile = build_profile(&spec_640_13mm(), TargetClass::Human).unwrap();

    assert_eq!(profile.target, TargetClass::Human);
    assert_eq!(profile.per_level.detection, est(244, 801));
    assert_eq!(profile.per_level.recognition, est(61, 200));
    assert_eq!(profile.per_level.identification, est(30, 98));
    assert_eq!(profile.coverage_area_sq_ft, 1_007_824);
}

#[test]
fn test_long_lens_profiles() {
    let profiles = build_all_profiles(&spec_640_75mm()).unwrap();

    assert_eq!(profiles.human.per_level.detection, est(1411, 4629));
    assert_eq!(profiles.human.per_level.recognition, est(352, 1155));
    assert_eq!(profiles.human.per_level.identification, est(176, 577));

    assert_eq!(profiles.vehicle.per_level.detection, est(1960, 6430));
    assert_eq!(profiles.vehicle.per_level.recognition, est(490, 1608));
    assert_eq!(profiles.vehicle.per_level.identification, est(245, 804));
}

#[test]
fn test_small_core_profiles() {
    let profiles = build_all_profiles(&spec_320_18mm()).unwrap();

    assert_eq!(profiles.human.per_level.detection, est(239, 784));
    assert_eq!(profiles.vehicle.per_level.detection, est(333, 1093));
    assert_eq!(profiles.vehicle.per_level.identification, est(41, 135));
}

#[test]
fn test_lens_for_short_range() {
    let rec = recommend_lens(100.0, 17.0, 640, TargetClass::Human, DetectionLevel::Detection)
        .unwrap();

    assert_eq!(rec.ideal_focal_length_mm, 5);
    assert_eq!(rec.selected_focal_length_mm, 7.5);
    assert_eq!(rec.catalog_options_mm.len(), 13);
}

#[test]
fn test_perimeter_plan() {
    let plan = plan_perimeter_coverage(1000.0, 300.0, 20.0).unwrap();

    assert_eq!(plan.cameras_required, 3);
    assert_eq!(plan.coverage_per_camera_ft, 480);
    assert_close(plan.total_coverage_ft, 1440.0, 1e-9);
}

#[test]
fn test_zero_range_cost_is_guarded() {
    let result = cost_per_coverage(1000.0, 0.0);

    assert!(matches!(result, Err(RangeError::DivisionGuard { .. })));
    assert!(!result.unwrap_err().is_input_error());
}

#[test]
fn test_invalid_spec_never_reaches_formula() {
    assert!(OpticalSpec::new(0.0, 17.0, 640).is_err());
    assert!(OpticalSpec::new(13.0, -17.0, 640).is_err());
    assert!(OpticalSpec::new(13.0, 17.0, 0).is_err());
    assert!(OpticalSpec::new(f64::NAN, 17.0, 640).is_err());
    assert!(OpticalSpec::new(13.0, f64::INFINITY, 640).is_err());
}

#[test]
fn test_oversized_results_are_errors() {
    // Both specs pass validation but their ranges do not fit a u32
    let overflowing = OpticalSpec::new(1e300, 1e-300, 640).unwrap();
    let oversized = OpticalSpec::new(1e6, 1e-3, 640).unwrap();

    for spec in [overflowing, oversized] {
        assert!(matches!(
            build_profile(&spec, TargetClass::Human),
            Err(RangeError::InvalidSpecification { field: "range_m", .. })
        ));
    }
    assert!(plan_perimeter_coverage(1e15, 0.001, 20.0).is_err());
}

#[test]
fn test_night_comparison() {
    let result = compare_thermal_vs_visible(&spec_640_75mm(), 50.0).unwrap();

    // 1411 / 50 × 100 = 2822
    assert_eq!(result.thermal_advantage, ThermalAdvantage::Better { percent: 2822 });
    assert_eq!(result.thermal_profile.per_level.detection, est(1411, 4629));
    assert_eq!(result.visible_night_range_m, 50.0);
}

#[test]
fn test_formatted_range_label() {
    let profile = build_profile(&spec_640_75mm(), TargetClass::Human).unwrap();
    let label = format_detection_range(profile.per_level.detection);

    assert_eq!(label.as_str(), "1,411m (4,629ft)");
}

#[test]
fn test_engine_site_estimate() {
    let engine = ThermalEngine::new(EngineConfig::standard()).unwrap();
    let estimate = engine.estimate_perimeter(&spec_640_75mm(), 20_000.0).unwrap();

    // 4629 × 2 × 0.8 = 7406.4 → ceil(20000 / 7406.4) = 3
    assert_eq!(estimate.plan.cameras_required, 3);
    assert_eq!(estimate.plan.coverage_per_camera_ft, 7406);
    assert_close(estimate.plan.total_coverage_ft, 3.0 * 7406.4, 1e-6);
}
