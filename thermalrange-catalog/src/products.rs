//! Vendor range-sheet table
//!
//! Lens EFL, detector pitch and detector width for every model on the
//! published FLIR security range sheet, grouped by product series. Values
//! are reproduced as published; range figures are derived from them by the
//! engine, never stored.

/// One row of the range sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductRow {
    /// Model name as printed on the sheet
    pub model: &'static str,
    /// Product series
    pub series: &'static str,
    /// Lens effective focal length (mm)
    pub focal_length_mm: f64,
    /// Detector pixel pitch (µm)
    pub pixel_pitch_um: f64,
    /// Detector width (px)
    pub horizontal_resolution_px: u32,
}

/// Fixed thermal with analytics
pub const F_SERIES_ID: &str = "F-Series ID";
/// Fixed thermal
pub const FC_ID: &str = "FC-ID";
/// Multispectral, thermal plus 4K visible
pub const FH_ID: &str = "FH-ID";
/// Thermal PTZ
pub const PT_SERIES: &str = "PT-Series";
/// Compact fixed thermal
pub const FB_ID: &str = "FB-ID";

/// Every series on the sheet, in sheet order
pub const SERIES: [&str; 5] = [F_SERIES_ID, FC_ID, FH_ID, PT_SERIES, FB_ID];

const fn row(
    model: &'static str,
    series: &'static str,
    focal_length_mm: f64,
    pixel_pitch_um: f64,
    horizontal_resolution_px: u32,
) -> ProductRow {
    ProductRow {
        model,
        series,
        focal_length_mm,
        pixel_pitch_um,
        horizontal_resolution_px,
    }
}

/// The range sheet, in sheet order
pub const FLIR_PRODUCT_RANGES: [ProductRow; 37] = [
    row("F-644-ID", F_SERIES_ID, 13.0, 17.0, 640),
    row("F-625-ID", F_SERIES_ID, 25.0, 17.0, 640),
    row("F-617-ID", F_SERIES_ID, 35.0, 17.0, 640),
    row("F-612-ID", F_SERIES_ID, 50.0, 17.0, 640),
    row("F-610-ID", F_SERIES_ID, 65.0, 17.0, 640),
    row("F-608-ID", F_SERIES_ID, 75.0, 17.0, 640),
    row("F-606-ID", F_SERIES_ID, 100.0, 17.0, 640),
    row("FC-690", FC_ID, 7.5, 17.0, 640),
    row("FC-669", FC_ID, 9.0, 17.0, 640),
    row("FC-644", FC_ID, 13.0, 17.0, 640),
    row("FC-632", FC_ID, 19.0, 17.0, 640),
    row("FC-625", FC_ID, 25.0, 17.0, 640),
    row("FC-617", FC_ID, 35.0, 17.0, 640),
    row("FC-610", FC_ID, 60.0, 17.0, 640),
    row("FC-608", FC_ID, 75.0, 17.0, 640),
    row("FH-669", FH_ID, 9.0, 17.0, 640),
    row("FH-644", FH_ID, 13.0, 17.0, 640),
    row("FH-625", FH_ID, 25.0, 17.0, 640),
    row("FH-617", FH_ID, 35.0, 17.0, 640),
    row("FH-612", FH_ID, 50.0, 17.0, 640),
    row("FH-610", FH_ID, 60.0, 17.0, 640),
    row("FH-608", FH_ID, 75.0, 17.0, 640),
    row("PT-644", PT_SERIES, 13.0, 17.0, 640),
    row("PT-625", PT_SERIES, 25.0, 17.0, 640),
    row("PT-617", PT_SERIES, 35.0, 17.0, 640),
    row("PT-612", PT_SERIES, 50.0, 17.0, 640),
    row("PT-608", PT_SERIES, 75.0, 17.0, 640),
    row("PT-606Z", PT_SERIES, 105.0, 17.0, 640),
    row("FB-393", FB_ID, 3.7, 17.0, 320),
    row("FB-349", FB_ID, 6.8, 17.0, 320),
    row("FB-324", FB_ID, 12.8, 17.0, 320),
    row("FB-312", FB_ID, 18.0, 12.0, 320),
    row("FB-309", FB_ID, 24.0, 12.0, 320),
    row("FB-695", FB_ID, 4.9, 12.0, 640),
    row("FB-650", FB_ID, 8.7, 12.0, 640),
    row("FB-632", FB_ID, 14.0, 12.0, 640),
    row("FB-618", FB_ID, 24.0, 12.0, 640),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_has_a_known_series() {
        for row in FLIR_PRODUCT_RANGES.iter() {
            assert!(SERIES.contains(&row.series), "{} has series {}", row.model, row.series);
        }
    }

    #[test]
    fn series_sizes() {
        let count = |series: &str| {
            FLIR_PRODUCT_RANGES.iter().filter(|r| r.series == series).count()
        };
        assert_eq!(count(F_SERIES_ID), 7);
        assert_eq!(count(FC_ID), 8);
        assert_eq!(count(FH_ID), 7);
        assert_eq!(count(PT_SERIES), 6);
        assert_eq!(count(FB_ID), 9);
    }
}
