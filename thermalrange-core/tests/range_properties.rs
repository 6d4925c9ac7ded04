//! Property tests for the range engine

mod common;

use proptest::prelude::*;

use thermalrange_core::{
    build_profile, compute_range, constants::CATALOG_FOCAL_LENGTHS_MM, meters_to_feet,
    range::raw_range_meters, recommend_lens, DetectionLevel, OpticalSpec, TargetClass,
};

use common::RESOLUTIONS_PX;

fn target() -> impl Strategy<Value = TargetClass> {
    prop::sample::select(TargetClass::ALL.to_vec())
}

fn level() -> impl Strategy<Value = DetectionLevel> {
    prop::sample::select(DetectionLevel::ALL.to_vec())
}

fn spec() -> impl Strategy<Value = OpticalSpec> {
    (1.0f64..500.0, 5.0f64..50.0, 16u32..4096)
        .prop_map(|(focal, pitch, res)| OpticalSpec::new(focal, pitch, res).unwrap())
}

proptest! {
    #[test]
    fn test_levels_are_ordered(spec in spec(), target in target()) {
        let profile = build_profile(&spec, target).unwrap();
        let ranges = profile.per_level;

        prop_assert!(ranges.detection.meters >= ranges.recognition.meters);
        prop_assert!(ranges.recognition.meters >= ranges.identification.meters);
        prop_assert!(ranges.detection.feet >= ranges.recognition.feet);
        prop_assert!(ranges.recognition.feet >= ranges.identification.feet);
    }

    #[test]
    fn test_doubling_resolution_doubles_range(
        focal in 1.0f64..500.0,
        pitch in 5.0f64..50.0,
        res in 16u32..4096,
        target in target(),
        level in level(),
    ) {
        let single = OpticalSpec::new(focal, pitch, res).unwrap();
        let double = OpticalSpec::new(focal, pitch, res * 2).unwrap();
        let dim = target.critical_dimension_m();
        let pixels = level.required_pixels();

        let a = raw_range_meters(dim, &single, pixels).unwrap();
        let b = raw_range_meters(dim, &double, pixels).unwrap();
        prop_assert_eq!(b, 2.0 * a);
    }

    #[test]
    fn test_feet_strictly_increasing(meters in 0u32..10_000_000) {
        let next = meters_to_feet(meters as f64 + 1.0).unwrap();
        prop_assert!(next > meters_to_feet(meters as f64).unwrap());
    }

    #[test]
    fn test_selected_lens_is_catalog_member(
        range in 1.0f64..20_000.0,
        pitch in 5.0f64..50.0,
        res in prop::sample::select(RESOLUTIONS_PX.to_vec()),
        target in target(),
        level in level(),
    ) {
        let rec = recommend_lens(range, pitch, res, target, level).unwrap();
        prop_assert!(CATALOG_FOCAL_LENGTHS_MM.contains(&rec.selected_focal_length_mm));
    }

    #[test]
    fn test_lens_round_trip_stays_local(
        index in 0usize..CATALOG_FOCAL_LENGTHS_MM.len(),
        pitch in 10.0f64..=17.0,
        res in prop::sample::select(RESOLUTIONS_PX.to_vec()),
    ) {
        let focal = CATALOG_FOCAL_LENGTHS_MM[index];
        let spec = OpticalSpec::new(focal, pitch, res).unwrap();
        let range = compute_range(
            TargetClass::Human.critical_dimension_m(),
            &spec,
            DetectionLevel::Detection.required_pixels(),
        )
        .unwrap();

        let rec = recommend_lens(
            range as f64,
            pitch,
            res,
            TargetClass::Human,
            DetectionLevel::Detection,
        )
        .unwrap();
        let selected = CATALOG_FOCAL_LENGTHS_MM
            .iter()
            .position(|&f| f == rec.selected_focal_length_mm)
            .unwrap();

        prop_assert!(
            selected.abs_diff(index) <= 1,
            "{}mm came back as {}mm",
            focal,
            rec.selected_focal_length_mm
        );
    }
}

#[test]
fn test_zero_meters_is_zero_feet() {
    assert_eq!(meters_to_feet(0.0), Ok(0));
}
