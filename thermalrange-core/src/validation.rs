//! Common Input Checks
//!
//! ## Overview
//!
//! Shared guards used by every calculation so that bad numbers fail the
//! same way everywhere. All checks run before any arithmetic: a rejected
//! input never produces a partial result.
//!
//! ## Check Order
//!
//! ```text
//! 1. Finite?            NaN / ±inf          -> InvalidSpecification
//! 2. Positive?          <= 0                -> InvalidSpecification
//! 3. Usable divisor?    == 0 (economics)    -> DivisionGuard
//! 4. Fits the output?   > u32::MAX etc.     -> InvalidSpecification
//! ```
//!
//! Step 4 runs on results, not inputs: every rounded figure leaves the
//! engine through [`check_u32`] or [`check_u64`], never a bare `as` cast,
//! so an out-of-range result is an error rather than a saturated number.
//!
//! Economics helpers check step 1 themselves and map a zero range to
//! `DivisionGuard` rather than `InvalidSpecification`, so callers can tell
//! "nothing to divide by" apart from "typo in the form".

use crate::{
    errors::{RangeError, RangeResult},
    traits::Validatable,
};

/// Require a finite, strictly positive value
pub fn check_positive(field: &'static str, value: f64) -> RangeResult<f64> {
    if value.is_valid() && value > 0.0 {
        Ok(value)
    } else {
        Err(RangeError::invalid(field, value))
    }
}

/// Require a finite value
pub fn check_finite(field: &'static str, value: f64) -> RangeResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(RangeError::invalid(field, value))
    }
}

/// Require a value in `[min, max)`
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> RangeResult<f64> {
    if value.is_valid() && value >= min && value < max {
        Ok(value)
    } else {
        Err(RangeError::invalid(field, value))
    }
}

/// Require a non-zero integer count
pub fn check_count(field: &'static str, value: u32) -> RangeResult<u32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(RangeError::invalid(field, 0.0))
    }
}

/// Require a denominator greater than zero
pub fn check_denominator(operation: &'static str, value: f64) -> RangeResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(RangeError::DivisionGuard { operation })
    }
}

/// Convert a whole-number result to `u32`, rejecting values it cannot hold
pub fn check_u32(field: &'static str, value: f64) -> RangeResult<u32> {
    if value.is_valid() && value >= 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(RangeError::invalid(field, value))
    }
}

/// Convert a whole-number result to `u64`, rejecting values it cannot hold
pub fn check_u64(field: &'static str, value: f64) -> RangeResult<u64> {
    // u64::MAX as f64 rounds up to 2^64, itself out of range
    if value.is_valid() && value >= 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(RangeError::invalid(field, value))
    }
}
