//! Configured range engine
//!
//! [`ThermalEngine`] bundles an [`EngineConfig`] with the free functions so
//! callers that run custom criteria, overlap or lens lists do not have to
//! thread them through every call. The engine holds no mutable state and is
//! `Copy`; share it freely between threads.

use crate::{
    config::EngineConfig,
    coverage::{plan_perimeter_coverage, CoveragePlan},
    economics::{compare_thermal_vs_visible_with, cost_per_coverage, ComparisonResult, CoverageCost},
    errors::RangeResult,
    lens::{recommend_lens_with, LensRecommendation},
    optics::{DetectionLevel, OpticalSpec, TargetClass},
    profile::{build_all_profiles_with, build_profile_with, DetectionProfile, TargetProfiles},
    traits::SpecSource,
};

/// Profiles plus perimeter plan for one camera on one site
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteEstimate {
    /// Ranges for both target classes
    pub profiles: TargetProfiles,
    /// Cameras needed at the human detection range
    pub plan: CoveragePlan,
}

/// Range engine bound to a validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThermalEngine {
    config: EngineConfig,
}

impl ThermalEngine {
    /// Create an engine, rejecting inconsistent configurations
    pub fn new(config: EngineConfig) -> RangeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Profile for one target class
    pub fn profile(&self, spec: &OpticalSpec, target: TargetClass) -> RangeResult<DetectionProfile> {
        build_profile_with(spec, target, &self.config.criteria)
    }

    /// Profiles for every target class
    pub fn profiles(&self, spec: &OpticalSpec) -> RangeResult<TargetProfiles> {
        build_all_profiles_with(spec, &self.config.criteria)
    }

    /// Profiles for a named model, `Ok(None)` if the source does not know it
    pub fn profiles_for_model<S: SpecSource + ?Sized>(
        &self,
        source: &S,
        model: &str,
    ) -> RangeResult<Option<TargetProfiles>> {
        source.profiles_with(model, &self.config.criteria)
    }

    /// Perimeter plan with the configured overlap
    pub fn plan_perimeter(
        &self,
        perimeter_ft: f64,
        detection_range_ft: f64,
    ) -> RangeResult<CoveragePlan> {
        plan_perimeter_coverage(perimeter_ft, detection_range_ft, self.config.overlap_percent)
    }

    /// Lens from the configured option list
    pub fn recommend_lens(
        &self,
        desired_range_m: f64,
        pixel_pitch_um: f64,
        horizontal_resolution_px: u32,
        target: TargetClass,
        level: DetectionLevel,
    ) -> RangeResult<LensRecommendation> {
        recommend_lens_with(
            self.config.lens_options_mm,
            &self.config.criteria,
            desired_range_m,
            pixel_pitch_um,
            horizontal_resolution_px,
            target,
            level,
        )
    }

    /// Compare against the configured IR illuminator range
    pub fn compare_thermal_vs_visible(&self, spec: &OpticalSpec) -> RangeResult<ComparisonResult> {
        compare_thermal_vs_visible_with(
            spec,
            self.config.ir_illuminator_range_m,
            &self.config.criteria,
        )
    }

    /// Cost per unit of detection range
    pub fn cost_per_coverage(&self, price: f64, detection_range_m: f64) -> RangeResult<CoverageCost> {
        cost_per_coverage(price, detection_range_m)
    }

    /// Profiles and the camera count for a perimeter, planned at human
    /// detection range
    pub fn estimate_perimeter(
        &self,
        spec: &OpticalSpec,
        perimeter_ft: f64,
    ) -> RangeResult<SiteEstimate> {
        let profiles = self.profiles(spec)?;
        let detection_ft = profiles.human.per_level.detection.feet as f64;
        let plan = self.plan_perimeter(perimeter_ft, detection_ft)?;

        log_debug!(
            "Site estimate: {}ft perimeter, {} cameras at {}ft",
            perimeter_ft,
            plan.cameras_required,
            detection_ft
        );

        Ok(SiteEstimate { profiles, plan })
    }
}
