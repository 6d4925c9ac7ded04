//! Core traits
//!
//! Two seams: numeric validity, and where optical specs come from.
//! Keep them simple - the engine itself is plain functions.

use crate::errors::RangeResult;
use crate::optics::OpticalSpec;
use crate::profile::{build_all_profiles_with, TargetProfiles};
use crate::config::JohnsonCriteria;

/// Source of named optical specifications, e.g. a product catalog.
///
/// The engine never reaches for a global catalog; callers pass whichever
/// source they hold. Implementations must be immutable after construction.
pub trait SpecSource {
    /// Optical spec for a model name, `None` if the model is unknown
    fn spec(&self, model: &str) -> Option<OpticalSpec>;

    /// Number of models this source knows about
    fn len(&self) -> usize;

    /// True when the source holds no models
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Profiles for both target classes of a named model.
    ///
    /// An unknown model is `Ok(None)`: callers fall back to manual spec entry.
    fn profiles_with(
        &self,
        model: &str,
        criteria: &JohnsonCriteria,
    ) -> RangeResult<Option<TargetProfiles>> {
        match self.spec(model) {
            Some(spec) => build_all_profiles_with(&spec, criteria).map(Some),
            None => Ok(None),
        }
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable in a formula (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
