//! Shared fixtures for the range engine integration tests
//!
//! Specs here are the reference cameras quoted on published range sheets;
//! expected figures were checked by hand against those sheets.

#![allow(dead_code)]

use thermalrange_core::{OpticalSpec, RangeEstimate};

/// Resolutions sold across the current sensor line
pub const RESOLUTIONS_PX: [u32; 4] = [320, 640, 1024, 1280];

/// 640 × 17 µm core behind a 13 mm lens
pub fn spec_640_13mm() -> OpticalSpec {
    OpticalSpec::new(13.0, 17.0, 640).unwrap()
}

/// 640 × 17 µm core behind a 75 mm lens
pub fn spec_640_75mm() -> OpticalSpec {
    OpticalSpec::new(75.0, 17.0, 640).unwrap()
}

/// 320 × 12 µm core behind an 18 mm lens
pub fn spec_320_18mm() -> OpticalSpec {
    OpticalSpec::new(18.0, 12.0, 320).unwrap()
}

/// Shorthand for an expected estimate
pub fn est(meters: u32, feet: u32) -> RangeEstimate {
    RangeEstimate { meters, feet }
}

/// Assert two floats agree to within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}
