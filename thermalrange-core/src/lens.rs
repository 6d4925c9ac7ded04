//! Reverse lens recommender
//!
//! Inverts the forward formula to find the focal length that puts the
//! required pixels on target at a desired range, then snaps it to the
//! nearest lens actually sold.
//!
//! ```text
//! ideal_mm = round( range_m × required_pixels × pitch_um
//!                   / (target_m × horiz_px) )
//! ```
//!
//! Snapping keeps the *nearest* lens, so when the nearest one is shorter
//! than ideal the delivered range falls short of the request. That case is
//! logged at `warn`; callers that must guarantee the range should compare
//! `selected_focal_length_mm` against `ideal_focal_length_mm` themselves.

use crate::{
    config::JohnsonCriteria,
    constants::lenses::CATALOG_FOCAL_LENGTHS_MM,
    errors::{RangeError, RangeResult},
    optics::{DetectionLevel, TargetClass},
    validation,
};

/// Lens suggestion for a desired range
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LensRecommendation {
    /// Focal length that exactly meets the range, rounded (mm)
    #[cfg_attr(feature = "serde", serde(rename = "idealFocalLengthMM"))]
    pub ideal_focal_length_mm: u32,
    /// Lenses considered, ascending (mm)
    #[cfg_attr(feature = "serde", serde(rename = "catalogOptionsMM"))]
    pub catalog_options_mm: &'static [f64],
    /// Catalog lens nearest to the ideal (mm)
    #[cfg_attr(feature = "serde", serde(rename = "selectedFocalLengthMM"))]
    pub selected_focal_length_mm: f64,
}

impl LensRecommendation {
    /// True when the selected lens is shorter than ideal and will not reach
    /// the requested range
    pub fn under_delivers(&self) -> bool {
        self.selected_focal_length_mm < self.ideal_focal_length_mm as f64
    }
}

/// Nearest option to `ideal`. On an exact tie the earlier option wins.
pub fn nearest_focal_length(options: &[f64], ideal: f64) -> Option<f64> {
    let (&first, rest) = options.split_first()?;
    Some(rest.iter().fold(first, |prev, &curr| {
        if libm::fabs(curr - ideal) < libm::fabs(prev - ideal) {
            curr
        } else {
            prev
        }
    }))
}

/// Recommend a catalog lens with the standard criteria and lens list
pub fn recommend_lens(
    desired_range_m: f64,
    pixel_pitch_um: f64,
    horizontal_resolution_px: u32,
    target: TargetClass,
    level: DetectionLevel,
) -> RangeResult<LensRecommendation> {
    recommend_lens_with(
        &CATALOG_FOCAL_LENGTHS_MM,
        &JohnsonCriteria::default(),
        desired_range_m,
        pixel_pitch_um,
        horizontal_resolution_px,
        target,
        level,
    )
}

/// Recommend a lens from a custom option list and criteria
pub fn recommend_lens_with(
    options: &'static [f64],
    criteria: &JohnsonCriteria,
    desired_range_m: f64,
    pixel_pitch_um: f64,
    horizontal_resolution_px: u32,
    target: TargetClass,
    level: DetectionLevel,
) -> RangeResult<LensRecommendation> {
    let range = validation::check_positive("desired_range_m", desired_range_m)?;
    let pitch = validation::check_positive("pixel_pitch_um", pixel_pitch_um)?;
    let resolution = validation::check_count("horizontal_resolution_px", horizontal_resolution_px)?;

    let ideal = validation::check_u32(
        "ideal_focal_length_mm",
        libm::round(
            range * criteria.pixels(level) * pitch
                / (target.critical_dimension_m() * resolution as f64),
        ),
    )?;

    let selected = nearest_focal_length(options, ideal as f64).ok_or(
        RangeError::InvalidConfiguration {
            reason: "lens option list is empty",
        },
    )?;

    let recommendation = LensRecommendation {
        ideal_focal_length_mm: ideal,
        catalog_options_mm: options,
        selected_focal_length_mm: selected,
    };

    if recommendation.under_delivers() {
        log_warn!(
            "Lens for {}m {} {}: ideal {}mm, nearest catalog lens {}mm falls short",
            range,
            target,
            level,
            ideal,
            selected
        );
    }

    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_range_snaps_to_widest_lens() {
        let rec = recommend_lens(100.0, 17.0, 640, TargetClass::Human, DetectionLevel::Detection)
            .unwrap();
        // 100 × 3.6 × 17 / (1.8 × 640) = 5.31
        assert_eq!(rec.ideal_focal_length_mm, 5);
        assert_eq!(rec.selected_focal_length_mm, 7.5);
        assert!(!rec.under_delivers());
    }

    #[test]
    fn ties_keep_the_shorter_lens() {
        // 18 and 19 are both 0.5 from 18.5; 60 and 65 both 2.5 from 62.5
        assert_eq!(nearest_focal_length(&CATALOG_FOCAL_LENGTHS_MM, 18.5), Some(18.0));
        assert_eq!(nearest_focal_length(&CATALOG_FOCAL_LENGTHS_MM, 62.5), Some(60.0));
        assert_eq!(nearest_focal_length(&[9.0, 13.0], 11.0), Some(9.0));
    }

    #[test]
    fn beyond_catalog_picks_longest() {
        assert_eq!(nearest_focal_length(&CATALOG_FOCAL_LENGTHS_MM, 400.0), Some(105.0));
        assert_eq!(nearest_focal_length(&[], 10.0), None);
    }

    #[test]
    fn identification_needs_longer_glass() {
        // 300 × 28.8 × 17 / (1.8 × 640) = 127.5 → 128, beyond the catalog
        let rec = recommend_lens(
            300.0,
            17.0,
            640,
            TargetClass::Human,
            DetectionLevel::Identification,
        )
        .unwrap();
        assert_eq!(rec.ideal_focal_length_mm, 128);
        assert_eq!(rec.selected_focal_length_mm, 105.0);
        assert!(rec.under_delivers());
    }

    #[test]
    fn ideal_beyond_u32_rejected() {
        let det = DetectionLevel::Detection;
        // 1e12 m needs a 5.3e10 mm lens
        assert!(recommend_lens(1e300, 50.0, 1, TargetClass::Human, det).is_err());
        assert!(matches!(
            recommend_lens(1e12, 17.0, 640, TargetClass::Human, det),
            Err(RangeError::InvalidSpecification { field: "ideal_focal_length_mm", .. })
        ));
    }

    #[test]
    fn rejects_bad_inputs() {
        let det = DetectionLevel::Detection;
        assert!(recommend_lens(0.0, 17.0, 640, TargetClass::Human, det).is_err());
        assert!(recommend_lens(100.0, f64::NAN, 640, TargetClass::Human, det).is_err());
        assert!(recommend_lens(100.0, 17.0, 0, TargetClass::Human, det).is_err());
    }
}
