//! Frozen product catalog
//!
//! Entries are validated and their profiles computed once, when the catalog
//! is built. After [`CatalogBuilder::build`] the catalog is immutable, so a
//! shared reference can be read from any number of threads without locks.

use std::collections::BTreeMap;

use thermalrange_core::{
    profile::build_all_profiles_with, build_all_profiles, JohnsonCriteria, OpticalSpec,
    RangeResult, SpecSource, TargetProfiles,
};

use crate::{
    products::{ProductRow, FLIR_PRODUCT_RANGES},
    CatalogError, CatalogResult,
};

/// One catalog model with its precomputed profiles
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Model name (e.g., "F-644-ID")
    pub model_name: String,

    /// Product series (e.g., "F-Series ID")
    pub series: String,

    /// Validated optics
    pub spec: OpticalSpec,

    /// Profiles under the standard criteria
    pub profiles: TargetProfiles,
}

impl CatalogEntry {
    /// Validate a spec and compute its profiles
    pub fn new(model_name: &str, series: &str, spec: OpticalSpec) -> CatalogResult<Self> {
        let profiles = build_all_profiles(&spec)?;
        Ok(Self {
            model_name: model_name.to_string(),
            series: series.to_string(),
            spec,
            profiles,
        })
    }

    fn from_row(row: &ProductRow) -> CatalogResult<Self> {
        let spec = OpticalSpec::new(
            row.focal_length_mm,
            row.pixel_pitch_um,
            row.horizontal_resolution_px,
        )?
        .with_label(row.model)?;
        Self::new(row.model, row.series, spec)
    }
}

/// Collects entries, rejecting duplicate model names
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<String, CatalogEntry>,
}

impl CatalogBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A model name may only be registered once.
    pub fn register(&mut self, entry: CatalogEntry) -> CatalogResult<()> {
        if self.entries.contains_key(&entry.model_name) {
            return Err(CatalogError::DuplicateModel(entry.model_name));
        }
        self.entries.insert(entry.model_name.clone(), entry);
        Ok(())
    }

    /// Add every row of a range-sheet table
    pub fn register_rows(&mut self, rows: &[ProductRow]) -> CatalogResult<()> {
        for row in rows {
            self.register(CatalogEntry::from_row(row)?)?;
        }
        Ok(())
    }

    /// Freeze into a catalog
    pub fn build(self) -> ProductCatalog {
        log::debug!("Product catalog built with {} models", self.entries.len());
        ProductCatalog {
            entries: self.entries,
        }
    }
}

/// Immutable map from model name to catalog entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl ProductCatalog {
    /// Catalog holding the stock FLIR range sheet.
    ///
    /// This is the fallible way to load the stock sheet; call it once at
    /// startup and keep the result. [`DEFAULT_CATALOG`] panics instead.
    pub fn flir_defaults() -> CatalogResult<Self> {
        let mut builder = CatalogBuilder::new();
        builder.register_rows(&FLIR_PRODUCT_RANGES)?;
        Ok(builder.build())
    }

    /// Profiles for a model, `None` if the catalog does not list it
    pub fn lookup(&self, model: &str) -> Option<TargetProfiles> {
        let found = self.entries.get(model).map(|entry| entry.profiles);
        if found.is_none() {
            log::debug!("Catalog miss: {}", model);
        }
        found
    }

    /// Profiles for a model, treating a miss as an error
    pub fn require(&self, model: &str) -> CatalogResult<TargetProfiles> {
        self.lookup(model)
            .ok_or_else(|| CatalogError::NotFound(model.to_string()))
    }

    /// Full entry for a model
    pub fn entry(&self, model: &str) -> Option<&CatalogEntry> {
        self.entries.get(model)
    }

    /// Entries in one series, ordered by model name
    pub fn series<'a>(&'a self, series: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.values().filter(move |entry| entry.series == series)
    }

    /// Every model name, sorted
    pub fn model_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no models are listed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpecSource for ProductCatalog {
    fn spec(&self, model: &str) -> Option<OpticalSpec> {
        self.entries.get(model).map(|entry| entry.spec.clone())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn profiles_with(
        &self,
        model: &str,
        criteria: &JohnsonCriteria,
    ) -> RangeResult<Option<TargetProfiles>> {
        // Stored profiles are only valid for the standard criteria
        if *criteria == JohnsonCriteria::default() {
            return Ok(self.lookup(model));
        }
        match self.entry(model) {
            Some(entry) => build_all_profiles_with(&entry.spec, criteria).map(Some),
            None => Ok(None),
        }
    }
}

lazy_static::lazy_static! {
    /// Process-wide catalog holding the stock FLIR range sheet.
    ///
    /// Built on first use. The sheet is a compile-time table, so a build
    /// failure is a bug in that table and panics on first access.
    pub static ref DEFAULT_CATALOG: ProductCatalog =
        ProductCatalog::flir_defaults().expect("stock range sheet must build");
}
