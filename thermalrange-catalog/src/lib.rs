//! Product catalog and exchange records for ThermalRange
//!
//! ## Overview
//!
//! The range engine in `thermalrange-core` works on bare optical specs. This
//! crate supplies the two things a quoting workflow layers on top:
//!
//! 1. **Product Catalog**: the vendor range-sheet table of thermal camera
//!    models, frozen into an immutable map at startup
//! 2. **Exchange Records**: a site estimate (spec, both target profiles and
//!    the perimeter plan) encoded as JSON or as Avro for long-term storage
//!
//! ## Dependency Injection
//!
//! [`ProductCatalog`] implements [`thermalrange_core::SpecSource`]. Engine
//! operations take it as an argument; nothing in the core reaches for a
//! global. [`DEFAULT_CATALOG`] exists for callers that want the stock table
//! without building it themselves.
//!
//! ```rust
//! use thermalrange_catalog::ProductCatalog;
//! use thermalrange_core::ThermalEngine;
//!
//! let catalog = ProductCatalog::flir_defaults()?;
//! let engine = ThermalEngine::default();
//!
//! let profiles = engine.profiles_for_model(&catalog, "F-644-ID")?.unwrap();
//! assert_eq!(profiles.human.per_level.detection.meters, 244);
//!
//! // A miss is an empty result, not an error
//! assert!(catalog.lookup("unknown-model-xyz").is_none());
//! assert_eq!(catalog.len(), 37);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Schema Evolution
//!
//! Avro schemas carry the version in their name (`site_estimate_v1`). New
//! fields are appended with defaults; fields are never removed.

#![deny(unsafe_code)]

use thermalrange_core::RangeError;

pub mod exchange;
pub mod products;
pub mod registry;
pub mod schemas;

pub use exchange::SiteEstimateRecord;
pub use registry::{CatalogBuilder, CatalogEntry, ProductCatalog, DEFAULT_CATALOG};

/// Result type for catalog and exchange operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog and exchange errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum CatalogError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Model already registered: {0}")]
    DuplicateModel(String),

    #[error("Invalid catalog spec: {0}")]
    Spec(RangeError),

    #[error("Failed to parse schema: {0}")]
    Schema(String),

    #[error("Failed to encode record: {0}")]
    Encode(String),

    #[error("Failed to decode record: {0}")]
    Decode(String),
}

impl From<RangeError> for CatalogError {
    fn from(err: RangeError) -> Self {
        CatalogError::Spec(err)
    }
}
