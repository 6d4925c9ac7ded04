//! ThermalRange Avro schemas
//!
//! Versioned by name. Field names are snake_case on the Avro side; the JSON
//! form of the same records uses the camelCase names of the estimate
//! workflow.

use apache_avro::Schema;
use serde_json::json;

use crate::{CatalogError, CatalogResult};

/// Namespace shared by every estimate schema
pub const NAMESPACE: &str = "io.thermalrange.estimates.v1";

/// Site estimate schema v1.0.0
///
/// One record per camera choice on a site: the optics, the profiles for
/// both target classes and the perimeter plan at human detection range.
pub fn site_estimate_v1() -> CatalogResult<Schema> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "SiteEstimate",
        "doc": "Johnson Criteria ranges and perimeter plan for one camera",
        "fields": [
            {
                "name": "model_name",
                "type": ["null", "string"],
                "default": null,
                "doc": "Catalog model, null for a manually entered spec"
            },
            {
                "name": "spec",
                "type": {
                    "type": "record",
                    "name": "OpticalSpec",
                    "fields": [
                        {
                            "name": "focal_length_mm",
                            "type": "double",
                            "doc": "Lens effective focal length"
                        },
                        {
                            "name": "pixel_pitch_um",
                            "type": "double",
                            "doc": "Detector pixel pitch in micrometers"
                        },
                        {
                            "name": "horizontal_resolution_px",
                            "type": "long"
                        },
                        {
                            "name": "label",
                            "type": ["null", "string"],
                            "default": null
                        }
                    ]
                }
            },
            {
                "name": "human",
                "type": {
                    "type": "record",
                    "name": "DetectionProfile",
                    "fields": [
                        {
                            "name": "target",
                            "type": {
                                "type": "enum",
                                "name": "TargetClass",
                                "symbols": ["HUMAN", "VEHICLE"]
                            }
                        },
                        {
                            "name": "detection",
                            "type": {
                                "type": "record",
                                "name": "RangeEstimate",
                                "fields": [
                                    {"name": "meters", "type": "long"},
                                    {"name": "feet", "type": "long"}
                                ]
                            }
                        },
                        {"name": "recognition", "type": "RangeEstimate"},
                        {"name": "identification", "type": "RangeEstimate"},
                        {
                            "name": "coverage_area_sq_ft",
                            "type": "long",
                            "doc": "Half-disc area at detection range"
                        }
                    ]
                }
            },
            {
                "name": "vehicle",
                "type": "DetectionProfile"
            },
            {
                "name": "plan",
                "type": {
                    "type": "record",
                    "name": "CoveragePlan",
                    "fields": [
                        {"name": "cameras_required", "type": "long"},
                        {
                            "name": "coverage_per_camera_ft",
                            "type": "long",
                            "doc": "Rounded for display"
                        },
                        {
                            "name": "total_coverage_ft",
                            "type": "double",
                            "doc": "Cameras times unrounded per-camera coverage"
                        }
                    ]
                }
            }
        ]
    });

    Schema::parse(&schema_json).map_err(|e| CatalogError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_estimate_schema_parses() {
        let schema = site_estimate_v1().unwrap();
        let name = schema.name().unwrap();
        assert_eq!(name.name, "SiteEstimate");
        assert_eq!(name.namespace.as_deref(), Some(NAMESPACE));
    }
}
