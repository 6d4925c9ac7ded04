//! Core range engine for ThermalRange
//!
//! Evaluates the Johnson Criteria for thermal cameras and derives the
//! planning figures a security designer needs from them.
//!
//! Key constraints:
//! - Every operation is a pure function over immutable inputs
//! - No heap allocation (bounded strings only), usable without `std`
//! - Bad numbers are rejected before any arithmetic runs
//!
//! ```
//! use thermalrange_core::{build_profile, OpticalSpec, TargetClass};
//!
//! let spec = OpticalSpec::new(13.0, 17.0, 640)?;
//! let profile = build_profile(&spec, TargetClass::Human)?;
//!
//! assert_eq!(profile.per_level.detection.meters, 244);
//! assert_eq!(profile.per_level.detection.feet, 801);
//! # Ok::<(), thermalrange_core::RangeError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod coverage;
pub mod economics;
pub mod engine;
pub mod errors;
pub mod lens;
pub mod optics;
pub mod profile;
pub mod range;
pub mod traits;
pub mod units;
pub mod validation;

// Public API
pub use config::{EngineConfig, JohnsonCriteria};
pub use coverage::{plan_perimeter_coverage, CoveragePlan};
pub use economics::{
    compare_thermal_vs_visible, cost_per_coverage, ComparisonResult, CoverageCost,
    ThermalAdvantage,
};
pub use engine::{SiteEstimate, ThermalEngine};
pub use errors::{RangeError, RangeResult};
pub use lens::{recommend_lens, LensRecommendation};
pub use optics::{DetectionLevel, OpticalSpec, TargetClass};
pub use profile::{
    build_all_profiles, build_profile, format_detection_range, DetectionProfile, LevelRanges,
    TargetProfiles,
};
pub use range::{compute_range, RangeEstimate};
pub use traits::SpecSource;
pub use units::meters_to_feet;

/// Crate version, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
