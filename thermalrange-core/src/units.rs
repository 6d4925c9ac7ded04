//! Meter / foot conversions
//!
//! Range sheets quote whole feet rounded from whole meters, so
//! `meters_to_feet` rounds. The inverse helpers do not.

use crate::{
    constants::units::{FEET_PER_METER, SQ_FEET_PER_SQ_METER},
    errors::RangeResult,
    validation,
};

/// Convert meters to whole feet: `round(m * 3.28084)`.
///
/// Negative, non-finite, or beyond `u32::MAX` feet is `InvalidSpecification`.
pub fn meters_to_feet(meters: f64) -> RangeResult<u32> {
    validation::check_u32("range_ft", libm::round(meters * FEET_PER_METER))
}

/// Convert feet to meters, unrounded
pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

/// Convert an area in square feet to square meters, unrounded
pub fn sq_feet_to_sq_meters(sq_feet: f64) -> f64 {
    sq_feet / SQ_FEET_PER_SQ_METER
}
