//! Shared fixtures for catalog integration tests

#![allow(dead_code)]

use thermalrange_catalog::ProductCatalog;
use thermalrange_core::{OpticalSpec, RangeEstimate};

/// Freshly built stock catalog
pub fn stock_catalog() -> ProductCatalog {
    ProductCatalog::flir_defaults().expect("stock catalog builds")
}

/// 640 × 17 µm core behind a 13 mm lens
pub fn spec_640_13mm() -> OpticalSpec {
    OpticalSpec::new(13.0, 17.0, 640).unwrap()
}

/// Shorthand for an expected estimate
pub fn est(meters: u32, feet: u32) -> RangeEstimate {
    RangeEstimate { meters, feet }
}
