//! Error Types for Range Engine Failures
//!
//! ## Design Philosophy
//!
//! The engine is a closed-form formula evaluator, so everything that can go
//! wrong is known before any arithmetic runs:
//!
//! 1. **Small Size**: Variants carry only a field name (`&'static str`) and
//!    the offending number, so errors are `Copy` and cheap to return.
//!
//! 2. **No Heap Allocation**: No `String` context. The core builds without
//!    `std`, and so does its error type.
//!
//! 3. **Deterministic**: Identical bad input always produces the identical
//!    error. Nothing here is worth retrying.
//!
//! ## Error Categories
//!
//! ### Input Violations
//! - `InvalidSpecification`: a number is zero, negative, NaN or infinite
//! - `InvalidLabel`: a model label does not fit the bounded label buffer
//! - `InvalidConfiguration`: engine configuration breaks an invariant
//!
//! ### Arithmetic Guards
//! - `DivisionGuard`: an economics helper would divide by zero
//!
//! Catalog misses are not errors at this level: lookups return `Option`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use thermalrange_core::{cost_per_coverage, RangeError};
//!
//! match cost_per_coverage(1000.0, 0.0) {
//!     Ok(cost) => println!("{} per meter", cost.cost_per_meter),
//!     Err(RangeError::DivisionGuard { .. }) => {
//!         // No detection range - nothing to price
//!     }
//!     Err(e) => println!("{}", e.user_message()),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for range engine operations
pub type RangeResult<T> = Result<T, RangeError>;

/// Range engine errors - kept small, all context is static
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Numeric input is non-positive or non-finite
    #[error("Invalid specification: {field} = {value} (must be positive and finite)")]
    InvalidSpecification {
        /// Name of the rejected input
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A denominator in an economics helper is zero
    #[error("Division guard: {operation} has a zero denominator")]
    DivisionGuard {
        /// Operation that was refused
        operation: &'static str,
    },

    /// Model label longer than the bounded label buffer
    #[error("Invalid label: longer than {max_len} bytes")]
    InvalidLabel {
        /// Maximum accepted label length in bytes
        max_len: usize,
    },

    /// Engine configuration violates an invariant
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration
        reason: &'static str,
    },
}

impl RangeError {
    /// Shorthand for an `InvalidSpecification` error
    pub fn invalid(field: &'static str, value: f64) -> Self {
        Self::InvalidSpecification { field, value }
    }

    /// True when the caller supplied bad input and should show a validation message
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RangeError::InvalidSpecification { .. } | RangeError::InvalidLabel { .. }
        )
    }

    /// User-facing message for display next to the offending form input
    pub fn user_message(&self) -> &'static str {
        match self {
            RangeError::InvalidSpecification { .. } => {
                "Camera specifications must be positive numbers. Please check the lens, pixel pitch and resolution."
            }
            RangeError::DivisionGuard { .. } => {
                "A detection range greater than zero is required for this calculation."
            }
            RangeError::InvalidLabel { .. } => "The camera model name is too long.",
            RangeError::InvalidConfiguration { .. } => {
                "The calculator is misconfigured. Please contact support."
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RangeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidSpecification { field, value } =>
                defmt::write!(fmt, "Invalid {} = {}", field, value),
            Self::DivisionGuard { operation } =>
                defmt::write!(fmt, "Division guard: {}", operation),
            Self::InvalidLabel { max_len } =>
                defmt::write!(fmt, "Label longer than {}", max_len),
            Self::InvalidConfiguration { reason } =>
                defmt::write!(fmt, "Invalid configuration: {}", reason),
        }
    }
}
