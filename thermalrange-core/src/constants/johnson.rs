//! Johnson Criteria Pixel Counts
//!
//! The Johnson Criteria relate the number of pixels spanning a target's
//! critical dimension to what an observer can tell about it. The counts
//! below are the ones thermal manufacturers publish range sheets against.
//!
//! ```text
//! Level          | Pixels on target | Observer can tell
//! ---------------|------------------|-------------------------------
//! Detection      | 3.6  x 1         | something is there
//! Recognition    | 14.4 x 4         | it's a person (or a vehicle)
//! Identification | 28.8 x 8         | person holding a weapon
//! ```

/// Pixels across the critical dimension needed to detect a target.
///
/// Source: FLIR thermal security camera range data (Johnson Criteria, 50% probability)
pub const DETECTION_PIXELS: f64 = 3.6;

/// Pixels across the critical dimension needed to recognize a target.
///
/// Four times the detection count.
pub const RECOGNITION_PIXELS: f64 = 14.4;

/// Pixels across the critical dimension needed to identify a target.
///
/// Eight times the detection count.
pub const IDENTIFICATION_PIXELS: f64 = 28.8;
