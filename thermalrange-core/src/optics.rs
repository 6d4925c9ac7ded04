//! Optical specifications, target classes and detection levels
//!
//! `OpticalSpec` is the only input most callers build by hand. It can only
//! be obtained through [`OpticalSpec::new`] (or deserialization, which runs
//! the same checks), so every spec the engine sees is already valid.

use core::fmt;

use crate::{
    constants::{johnson, targets},
    errors::{RangeError, RangeResult},
    validation,
};

/// Maximum model label length in bytes
pub const MAX_LABEL_LEN: usize = 32;

/// Bounded model label
pub type Label = heapless::String<MAX_LABEL_LEN>;

/// Thermal camera optics: lens, detector pitch and detector width.
///
/// Field names on the wire follow the estimate workflow's record format:
/// `focalLengthMM`, `pixelPitchMicrometers`, `horizontalResolutionPx`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOpticalSpec"))]
pub struct OpticalSpec {
    /// Effective focal length (mm)
    #[cfg_attr(feature = "serde", serde(rename = "focalLengthMM"))]
    focal_length_mm: f64,

    /// Detector pixel pitch (µm)
    #[cfg_attr(feature = "serde", serde(rename = "pixelPitchMicrometers"))]
    pixel_pitch_um: f64,

    /// Detector width in pixels
    #[cfg_attr(feature = "serde", serde(rename = "horizontalResolutionPx"))]
    horizontal_resolution_px: u32,

    /// Optional model name
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    label: Option<Label>,
}

impl OpticalSpec {
    /// Create a spec, rejecting non-positive or non-finite numbers
    pub fn new(
        focal_length_mm: f64,
        pixel_pitch_um: f64,
        horizontal_resolution_px: u32,
    ) -> RangeResult<Self> {
        Ok(Self {
            focal_length_mm: validation::check_positive("focal_length_mm", focal_length_mm)?,
            pixel_pitch_um: validation::check_positive("pixel_pitch_um", pixel_pitch_um)?,
            horizontal_resolution_px: validation::check_count(
                "horizontal_resolution_px",
                horizontal_resolution_px,
            )?,
            label: None,
        })
    }

    /// Attach a model label
    pub fn with_label(mut self, label: &str) -> RangeResult<Self> {
        let mut bounded = Label::new();
        bounded
            .push_str(label)
            .map_err(|_| RangeError::InvalidLabel { max_len: MAX_LABEL_LEN })?;
        self.label = Some(bounded);
        Ok(self)
    }

    /// Same detector behind a different lens
    pub fn with_focal_length(&self, focal_length_mm: f64) -> RangeResult<Self> {
        let mut spec = self.clone();
        spec.focal_length_mm = validation::check_positive("focal_length_mm", focal_length_mm)?;
        Ok(spec)
    }

    /// Effective focal length (mm)
    pub fn focal_length_mm(&self) -> f64 {
        self.focal_length_mm
    }

    /// Detector pixel pitch (µm)
    pub fn pixel_pitch_um(&self) -> f64 {
        self.pixel_pitch_um
    }

    /// Detector width in pixels
    pub fn horizontal_resolution_px(&self) -> u32 {
        self.horizontal_resolution_px
    }

    /// Model label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Unvalidated wire form of [`OpticalSpec`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawOpticalSpec {
    #[serde(rename = "focalLengthMM")]
    focal_length_mm: f64,
    #[serde(rename = "pixelPitchMicrometers")]
    pixel_pitch_um: f64,
    #[serde(rename = "horizontalResolutionPx")]
    horizontal_resolution_px: u32,
    #[serde(default)]
    label: Option<Label>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOpticalSpec> for OpticalSpec {
    type Error = RangeError;

    fn try_from(raw: RawOpticalSpec) -> RangeResult<Self> {
        let mut spec = OpticalSpec::new(
            raw.focal_length_mm,
            raw.pixel_pitch_um,
            raw.horizontal_resolution_px,
        )?;
        spec.label = raw.label;
        Ok(spec)
    }
}

/// Target classes with standard dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetClass {
    /// Standing person
    Human,
    /// Car or light truck
    Vehicle,
}

impl TargetClass {
    /// All target classes, in profile order
    pub const ALL: [TargetClass; 2] = [TargetClass::Human, TargetClass::Vehicle];

    /// Critical dimension (height) in meters - the only dimension the formula uses
    pub fn critical_dimension_m(self) -> f64 {
        match self {
            TargetClass::Human => targets::HUMAN_HEIGHT_M,
            TargetClass::Vehicle => targets::VEHICLE_HEIGHT_M,
        }
    }

    /// Target width in meters (reference only)
    pub fn width_m(self) -> f64 {
        match self {
            TargetClass::Human => targets::HUMAN_WIDTH_M,
            TargetClass::Vehicle => targets::VEHICLE_WIDTH_M,
        }
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            TargetClass::Human => "human",
            TargetClass::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for TargetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Johnson Criteria detection levels, loosest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DetectionLevel {
    /// Something is there
    Detection,
    /// What kind of thing it is
    Recognition,
    /// Which one / what it carries
    Identification,
}

impl DetectionLevel {
    /// All levels, loosest first
    pub const ALL: [DetectionLevel; 3] = [
        DetectionLevel::Detection,
        DetectionLevel::Recognition,
        DetectionLevel::Identification,
    ];

    /// Standard pixels required across the critical dimension
    pub fn required_pixels(self) -> f64 {
        match self {
            DetectionLevel::Detection => johnson::DETECTION_PIXELS,
            DetectionLevel::Recognition => johnson::RECOGNITION_PIXELS,
            DetectionLevel::Identification => johnson::IDENTIFICATION_PIXELS,
        }
    }

    /// What an observer can tell at this level
    pub fn description(self) -> &'static str {
        match self {
            DetectionLevel::Detection => "You can see something is there",
            DetectionLevel::Recognition => "You can see that it's a person",
            DetectionLevel::Identification => "You can see person holding a weapon",
        }
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            DetectionLevel::Detection => "detection",
            DetectionLevel::Recognition => "recognition",
            DetectionLevel::Identification => "identification",
        }
    }
}

impl fmt::Display for DetectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
