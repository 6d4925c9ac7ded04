//! Unit Conversion Factors

/// Feet in one meter.
///
/// Range sheets are quoted with this five-digit factor; outputs are compared
/// against them, so do not substitute the exact 1/0.3048.
pub const FEET_PER_METER: f64 = 3.28084;

/// Square feet in one square meter.
pub const SQ_FEET_PER_SQ_METER: f64 = 10.764;
