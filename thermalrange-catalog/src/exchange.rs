//! Site estimate exchange records
//!
//! A [`SiteEstimateRecord`] is what the estimate workflow stores and hands
//! between systems: the optics, an optional catalog model name, profiles
//! for both target classes and the perimeter plan.
//!
//! Two encodings:
//! - JSON via serde, camelCase field names
//! - Avro container files against [`site_estimate_v1`], built from
//!   `apache_avro::types::Value` so the wire layout is spelled out here
//!   rather than inferred from the Rust types

use apache_avro::{types::Value, Reader, Writer};
use serde::{Deserialize, Serialize};

use thermalrange_core::{
    CoveragePlan, DetectionProfile, LevelRanges, OpticalSpec, RangeEstimate, SiteEstimate,
    TargetClass, TargetProfiles, ThermalEngine,
};

use crate::{registry::ProductCatalog, schemas::site_estimate_v1, CatalogError, CatalogResult};

/// One camera's estimate for a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEstimateRecord {
    /// Catalog model, `None` for a manually entered spec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    /// Optics the estimate was computed from
    pub spec: OpticalSpec,

    /// Profiles and perimeter plan
    #[serde(flatten)]
    pub estimate: SiteEstimate,
}

impl SiteEstimateRecord {
    /// Estimate a manually entered spec
    pub fn from_spec(
        engine: &ThermalEngine,
        spec: OpticalSpec,
        perimeter_ft: f64,
    ) -> CatalogResult<Self> {
        let estimate = engine.estimate_perimeter(&spec, perimeter_ft)?;
        Ok(Self {
            model_name: None,
            spec,
            estimate,
        })
    }

    /// Estimate a catalog model
    pub fn for_model(
        engine: &ThermalEngine,
        catalog: &ProductCatalog,
        model: &str,
        perimeter_ft: f64,
    ) -> CatalogResult<Self> {
        let entry = catalog
            .entry(model)
            .ok_or_else(|| CatalogError::NotFound(model.to_string()))?;
        let estimate = engine.estimate_perimeter(&entry.spec, perimeter_ft)?;
        Ok(Self {
            model_name: Some(entry.model_name.clone()),
            spec: entry.spec.clone(),
            estimate,
        })
    }

    /// Encode as JSON
    pub fn to_json(&self) -> CatalogResult<String> {
        serde_json::to_string(self).map_err(|e| CatalogError::Encode(e.to_string()))
    }

    /// Decode from JSON. Optics are re-validated on the way in.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// Encode records into one Avro container
    pub fn to_avro(records: &[Self]) -> CatalogResult<Vec<u8>> {
        let schema = site_estimate_v1()?;
        let mut writer = Writer::new(&schema, Vec::new());

        for record in records {
            writer
                .append(record.to_avro_value())
                .map_err(|e| CatalogError::Encode(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CatalogError::Encode(e.to_string()))?;
        log::debug!("Encoded {} site estimates ({} bytes)", records.len(), bytes.len());
        Ok(bytes)
    }

    /// Decode every record in an Avro container
    pub fn from_avro(bytes: &[u8]) -> CatalogResult<Vec<Self>> {
        let schema = site_estimate_v1()?;
        let reader =
            Reader::with_schema(&schema, bytes).map_err(|e| CatalogError::Decode(e.to_string()))?;

        reader
            .map(|value| {
                let value = value.map_err(|e| CatalogError::Decode(e.to_string()))?;
                Self::from_avro_value(&value)
            })
            .collect()
    }

    fn to_avro_value(&self) -> Value {
        Value::Record(vec![
            ("model_name".to_string(), optional_string(self.model_name.as_deref())),
            ("spec".to_string(), spec_value(&self.spec)),
            ("human".to_string(), profile_value(&self.estimate.profiles.human)),
            ("vehicle".to_string(), profile_value(&self.estimate.profiles.vehicle)),
            ("plan".to_string(), plan_value(&self.estimate.plan)),
        ])
    }

    fn from_avro_value(value: &Value) -> CatalogResult<Self> {
        let fields = record_fields(value, "SiteEstimate")?;

        let profiles = TargetProfiles {
            human: read_profile(field(fields, "human")?)?,
            vehicle: read_profile(field(fields, "vehicle")?)?,
        };

        Ok(Self {
            model_name: read_optional_string(field(fields, "model_name")?)?,
            spec: read_spec(field(fields, "spec")?)?,
            estimate: SiteEstimate {
                profiles,
                plan: read_plan(field(fields, "plan")?)?,
            },
        })
    }
}

// Encoding

fn optional_string(value: Option<&str>) -> Value {
    match value {
        Some(s) => Value::Union(1, Box::new(Value::String(s.to_string()))),
        None => Value::Union(0, Box::new(Value::Null)),
    }
}

fn spec_value(spec: &OpticalSpec) -> Value {
    Value::Record(vec![
        ("focal_length_mm".to_string(), Value::Double(spec.focal_length_mm())),
        ("pixel_pitch_um".to_string(), Value::Double(spec.pixel_pitch_um())),
        (
            "horizontal_resolution_px".to_string(),
            Value::Long(spec.horizontal_resolution_px() as i64),
        ),
        ("label".to_string(), optional_string(spec.label())),
    ])
}

fn estimate_value(estimate: RangeEstimate) -> Value {
    Value::Record(vec![
        ("meters".to_string(), Value::Long(estimate.meters as i64)),
        ("feet".to_string(), Value::Long(estimate.feet as i64)),
    ])
}

fn profile_value(profile: &DetectionProfile) -> Value {
    let target = match profile.target {
        TargetClass::Human => Value::Enum(0, "HUMAN".to_string()),
        TargetClass::Vehicle => Value::Enum(1, "VEHICLE".to_string()),
    };

    Value::Record(vec![
        ("target".to_string(), target),
        ("detection".to_string(), estimate_value(profile.per_level.detection)),
        ("recognition".to_string(), estimate_value(profile.per_level.recognition)),
        ("identification".to_string(), estimate_value(profile.per_level.identification)),
        (
            "coverage_area_sq_ft".to_string(),
            Value::Long(profile.coverage_area_sq_ft as i64),
        ),
    ])
}

fn plan_value(plan: &CoveragePlan) -> Value {
    Value::Record(vec![
        ("cameras_required".to_string(), Value::Long(plan.cameras_required as i64)),
        (
            "coverage_per_camera_ft".to_string(),
            Value::Long(plan.coverage_per_camera_ft as i64),
        ),
        ("total_coverage_ft".to_string(), Value::Double(plan.total_coverage_ft)),
    ])
}

// Decoding

fn record_fields<'a>(value: &'a Value, record: &str) -> CatalogResult<&'a [(String, Value)]> {
    match value {
        Value::Record(fields) => Ok(fields),
        other => Err(CatalogError::Decode(format!(
            "expected {} record, found {:?}",
            record, other
        ))),
    }
}

fn field<'a>(fields: &'a [(String, Value)], name: &str) -> CatalogResult<&'a Value> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .ok_or_else(|| CatalogError::Decode(format!("missing field {}", name)))
}

fn read_double(value: &Value, name: &str) -> CatalogResult<f64> {
    match value {
        Value::Double(v) => Ok(*v),
        other => Err(CatalogError::Decode(format!("{}: expected double, found {:?}", name, other))),
    }
}

fn read_long(value: &Value, name: &str) -> CatalogResult<i64> {
    match value {
        Value::Long(v) => Ok(*v),
        Value::Int(v) => Ok(*v as i64),
        other => Err(CatalogError::Decode(format!("{}: expected long, found {:?}", name, other))),
    }
}

fn read_u32(value: &Value, name: &str) -> CatalogResult<u32> {
    let raw = read_long(value, name)?;
    u32::try_from(raw).map_err(|_| CatalogError::Decode(format!("{}: {} out of range", name, raw)))
}

fn read_u64(value: &Value, name: &str) -> CatalogResult<u64> {
    let raw = read_long(value, name)?;
    u64::try_from(raw).map_err(|_| CatalogError::Decode(format!("{}: {} out of range", name, raw)))
}

fn read_optional_string(value: &Value) -> CatalogResult<Option<String>> {
    match value {
        Value::Union(_, inner) => read_optional_string(inner),
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(CatalogError::Decode(format!(
            "expected optional string, found {:?}",
            other
        ))),
    }
}

fn read_spec(value: &Value) -> CatalogResult<OpticalSpec> {
    let fields = record_fields(value, "OpticalSpec")?;

    let spec = OpticalSpec::new(
        read_double(field(fields, "focal_length_mm")?, "focal_length_mm")?,
        read_double(field(fields, "pixel_pitch_um")?, "pixel_pitch_um")?,
        read_u32(field(fields, "horizontal_resolution_px")?, "horizontal_resolution_px")?,
    )?;

    match read_optional_string(field(fields, "label")?)? {
        Some(label) => Ok(spec.with_label(&label)?),
        None => Ok(spec),
    }
}

fn read_estimate(value: &Value) -> CatalogResult<RangeEstimate> {
    let fields = record_fields(value, "RangeEstimate")?;
    Ok(RangeEstimate {
        meters: read_u32(field(fields, "meters")?, "meters")?,
        feet: read_u32(field(fields, "feet")?, "feet")?,
    })
}

fn read_target(value: &Value) -> CatalogResult<TargetClass> {
    match value {
        Value::Enum(_, symbol) if symbol == "HUMAN" => Ok(TargetClass::Human),
        Value::Enum(_, symbol) if symbol == "VEHICLE" => Ok(TargetClass::Vehicle),
        other => Err(CatalogError::Decode(format!("unknown target class {:?}", other))),
    }
}

fn read_profile(value: &Value) -> CatalogResult<DetectionProfile> {
    let fields = record_fields(value, "DetectionProfile")?;
    Ok(DetectionProfile {
        target: read_target(field(fields, "target")?)?,
        per_level: LevelRanges {
            detection: read_estimate(field(fields, "detection")?)?,
            recognition: read_estimate(field(fields, "recognition")?)?,
            identification: read_estimate(field(fields, "identification")?)?,
        },
        coverage_area_sq_ft: read_u64(field(fields, "coverage_area_sq_ft")?, "coverage_area_sq_ft")?,
    })
}

fn read_plan(value: &Value) -> CatalogResult<CoveragePlan> {
    let fields = record_fields(value, "CoveragePlan")?;
    Ok(CoveragePlan {
        cameras_required: read_u32(field(fields, "cameras_required")?, "cameras_required")?,
        coverage_per_camera_ft: read_u32(
            field(fields, "coverage_per_camera_ft")?,
            "coverage_per_camera_ft",
        )?,
        total_coverage_ft: read_double(field(fields, "total_coverage_ft")?, "total_coverage_ft")?,
    })
}
