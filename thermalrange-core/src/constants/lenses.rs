//! Thermal Lens Catalog
//!
//! Focal lengths (mm) of the fixed lenses offered across the FLIR security
//! lines. Ascending order is relied on by the lens recommender: on an exact
//! tie it keeps the earlier (shorter) lens.

/// Available focal lengths in millimeters, ascending.
pub const CATALOG_FOCAL_LENGTHS_MM: [f64; 13] = [
    7.5, 9.0, 13.0, 18.0, 19.0, 25.0, 35.0, 50.0, 60.0, 65.0, 75.0, 100.0, 105.0,
];
