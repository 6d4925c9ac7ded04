//! Engine configuration
//!
//! The standard configuration reproduces published vendor range sheets and
//! should be left alone for customer-facing numbers. Custom configurations
//! exist for what-if studies (stricter criteria, more overlap) and are
//! validated so the range ordering invariant still holds.
//!
//! ```
//! use thermalrange_core::{EngineConfig, JohnsonCriteria};
//!
//! // Stricter-than-standard detection for a high-clutter site
//! let strict = JohnsonCriteria::new(6.0, 14.4, 28.8)?;
//! let config = EngineConfig { criteria: strict, ..EngineConfig::conservative() };
//! config.validate()?;
//! # Ok::<(), thermalrange_core::RangeError>(())
//! ```

use crate::{
    constants::{johnson, lenses, planning},
    errors::{RangeError, RangeResult},
    optics::DetectionLevel,
    validation,
};

/// Required pixels across the critical dimension, per detection level
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JohnsonCriteria {
    detection: f64,
    recognition: f64,
    identification: f64,
}

impl Default for JohnsonCriteria {
    fn default() -> Self {
        Self {
            detection: johnson::DETECTION_PIXELS,
            recognition: johnson::RECOGNITION_PIXELS,
            identification: johnson::IDENTIFICATION_PIXELS,
        }
    }
}

impl JohnsonCriteria {
    /// Custom pixel counts. Must be positive and strictly increasing.
    pub fn new(detection: f64, recognition: f64, identification: f64) -> RangeResult<Self> {
        let detection = validation::check_positive("detection_pixels", detection)?;
        let recognition = validation::check_positive("recognition_pixels", recognition)?;
        let identification = validation::check_positive("identification_pixels", identification)?;

        if !(detection < recognition && recognition < identification) {
            return Err(RangeError::InvalidConfiguration {
                reason: "pixel counts must increase from detection to identification",
            });
        }

        Ok(Self { detection, recognition, identification })
    }

    /// Pixels required for a level
    pub fn pixels(&self, level: DetectionLevel) -> f64 {
        match level {
            DetectionLevel::Detection => self.detection,
            DetectionLevel::Recognition => self.recognition,
            DetectionLevel::Identification => self.identification,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Johnson Criteria pixel counts
    pub criteria: JohnsonCriteria,

    /// Overlap between neighbouring perimeter cameras (%)
    pub overlap_percent: f64,

    /// Focal lengths the lens recommender may pick from, ascending
    pub lens_options_mm: &'static [f64],

    /// Visible-camera IR illuminator range used for comparisons (m)
    pub ir_illuminator_range_m: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl EngineConfig {
    /// Vendor-sheet defaults: standard criteria, 20% overlap, 50 m illuminator
    pub fn standard() -> Self {
        Self {
            criteria: JohnsonCriteria::default(),
            overlap_percent: planning::DEFAULT_OVERLAP_PERCENT,
            lens_options_mm: &lenses::CATALOG_FOCAL_LENGTHS_MM,
            ir_illuminator_range_m: planning::DEFAULT_IR_ILLUMINATOR_RANGE_M,
        }
    }

    /// Extra handover margin for high-security perimeters (30% overlap)
    pub fn conservative() -> Self {
        Self {
            overlap_percent: 30.0,
            ..Self::standard()
        }
    }

    /// Check every invariant the engine relies on
    pub fn validate(&self) -> RangeResult<()> {
        JohnsonCriteria::new(
            self.criteria.detection,
            self.criteria.recognition,
            self.criteria.identification,
        )?;

        validation::check_range(
            "overlap_percent",
            self.overlap_percent,
            0.0,
            planning::MAX_OVERLAP_PERCENT,
        )?;

        validation::check_positive("ir_illuminator_range_m", self.ir_illuminator_range_m)?;

        if self.lens_options_mm.is_empty() {
            return Err(RangeError::InvalidConfiguration {
                reason: "lens option list is empty",
            });
        }
        for &focal in self.lens_options_mm {
            validation::check_positive("lens_option_mm", focal)?;
        }
        if !self.lens_options_mm.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(RangeError::InvalidConfiguration {
                reason: "lens options must be strictly ascending",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_is_valid() {
        assert!(EngineConfig::standard().validate().is_ok());
        assert!(EngineConfig::conservative().validate().is_ok());
    }

    #[test]
    fn default_criteria_match_constants() {
        let criteria = JohnsonCriteria::default();
        assert_eq!(criteria.pixels(DetectionLevel::Detection), 3.6);
        assert_eq!(criteria.pixels(DetectionLevel::Recognition), 14.4);
        assert_eq!(criteria.pixels(DetectionLevel::Identification), 28.8);
    }

    #[test]
    fn criteria_must_increase() {
        assert!(matches!(
            JohnsonCriteria::new(14.4, 3.6, 28.8),
            Err(RangeError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            JohnsonCriteria::new(0.0, 14.4, 28.8),
            Err(RangeError::InvalidSpecification { field: "detection_pixels", .. })
        ));
    }

    #[test]
    fn overlap_bounds() {
        let config = EngineConfig { overlap_percent: 100.0, ..EngineConfig::standard() };
        assert!(config.validate().is_err());

        let config = EngineConfig { overlap_percent: 0.0, ..EngineConfig::standard() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lens_options_checked() {
        static UNSORTED: [f64; 3] = [13.0, 9.0, 25.0];
        let config = EngineConfig { lens_options_mm: &UNSORTED, ..EngineConfig::standard() };
        assert!(matches!(
            config.validate(),
            Err(RangeError::InvalidConfiguration { .. })
        ));

        let config = EngineConfig { lens_options_mm: &[], ..EngineConfig::standard() };
        assert!(config.validate().is_err());
    }
}
