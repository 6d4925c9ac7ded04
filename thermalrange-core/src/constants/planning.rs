//! Perimeter Planning and Comparison Defaults

/// Default overlap between neighbouring cameras on a perimeter (%).
///
/// 20% keeps a target in view of two cameras around each handover point.
pub const DEFAULT_OVERLAP_PERCENT: f64 = 20.0;

/// Upper bound (exclusive) on perimeter overlap (%). At 100% a camera
/// contributes no new coverage.
pub const MAX_OVERLAP_PERCENT: f64 = 100.0;

/// Default IR illuminator range for visible cameras at night (m).
pub const DEFAULT_IR_ILLUMINATOR_RANGE_M: f64 = 50.0;

/// Thermal detection must exceed the illuminator range by this factor to be
/// reported as an advantage.
pub const THERMAL_ADVANTAGE_RATIO: f64 = 2.0;
