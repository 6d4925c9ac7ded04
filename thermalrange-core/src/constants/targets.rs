//! Standard Target Dimensions
//!
//! Only the height (the critical dimension) drives range calculations.
//! Widths are kept as reference data for display.

// ===== HUMAN =====

/// Standing human height (m), about 6 ft.
pub const HUMAN_HEIGHT_M: f64 = 1.8;

/// Human shoulder width (m), about 2.5 ft.
pub const HUMAN_WIDTH_M: f64 = 0.75;

// ===== VEHICLE =====

/// Standard vehicle height (m), about 8.2 ft.
pub const VEHICLE_HEIGHT_M: f64 = 2.5;

/// Standard vehicle width (m), about 6.6 ft.
pub const VEHICLE_WIDTH_M: f64 = 2.0;
