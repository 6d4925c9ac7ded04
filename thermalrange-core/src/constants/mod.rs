//! Constants for ThermalRange Core
//!
//! Every numeric value the engine uses lives here, with its source.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Johnson**: Required pixel counts per detection level
//! - **Targets**: Standard target dimensions
//! - **Units**: Length and area conversion factors
//! - **Lenses**: Catalog focal lengths offered by the lens recommender
//! - **Planning**: Perimeter and comparison defaults
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the datasheet or standard a value comes from
//! 3. Use descriptive names that include units

/// Johnson Criteria pixel counts.
pub mod johnson;

/// Standard target dimensions for humans and vehicles.
pub mod targets;

/// Unit conversion factors.
pub mod units;

/// Discrete lens catalog used by the reverse lens recommender.
pub mod lenses;

/// Perimeter planning and comparison defaults.
pub mod planning;

// Re-export commonly used constants for convenience
pub use johnson::{DETECTION_PIXELS, IDENTIFICATION_PIXELS, RECOGNITION_PIXELS};

pub use targets::{
    HUMAN_HEIGHT_M, HUMAN_WIDTH_M, VEHICLE_HEIGHT_M, VEHICLE_WIDTH_M,
};

pub use units::{FEET_PER_METER, SQ_FEET_PER_SQ_METER};

pub use lenses::CATALOG_FOCAL_LENGTHS_MM;

pub use planning::{
    DEFAULT_IR_ILLUMINATOR_RANGE_M, DEFAULT_OVERLAP_PERCENT, THERMAL_ADVANTAGE_RATIO,
};
