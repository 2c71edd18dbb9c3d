//! Filter catalog loading.
//!
//! A catalog is a TOML document enumerating template filters together with
//! their documentation and usage examples:
//!
//! ```toml
//! [[filters]]
//! identifier = "upper"
//! documentation = "Uppercases text"
//! group = "text"
//!
//! [filters.examples.basic]
//! template = "{{ 'abc' | upper }}"
//! ```
//!
//! Loading is strict: a missing `identifier`, invalid TOML, or a duplicate
//! identifier fails with a [`ParseError`] before any rendering happens.
//! Unknown keys (such as the `fn` dotted-path field found in older catalog
//! files) are ignored so existing catalogs keep loading.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ParseError;

/// Catalog describing the filters built into this crate.
///
/// Kept in the same schema the loader consumes, so the crate documents itself
/// through its own pipeline.
pub const BUILTIN_CATALOG: &str = include_str!("filters.toml");

/// A single usage example: a template snippet to render verbatim.
///
/// The rendered output is derived at emission time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleEntry {
    /// Template source to render and display.
    pub template: String,
}

/// A named filter with documentation and ordered examples.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterDefinition {
    /// Unique name of the filter within the catalog.
    pub identifier: String,

    /// Prose describing what the filter does. May be empty.
    #[serde(default, alias = "description")]
    pub documentation: String,

    /// Optional grouping label (e.g. `"text"`).
    #[serde(default)]
    pub group: Option<String>,

    /// Examples in document order, keyed by example name.
    #[serde(default)]
    pub examples: IndexMap<String, ExampleEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    filters: Vec<FilterDefinition>,
}

/// An ordered collection of filter definitions.
///
/// Order is the document order of the catalog file and is preserved through
/// emission. The catalog is immutable once loaded.
#[derive(Debug, Clone)]
pub struct FilterCatalog {
    filters: Vec<FilterDefinition>,
}

impl FilterCatalog {
    /// Loads a catalog from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: origin.clone(),
            source,
        })?;
        log::debug!("loading filter catalog from {origin}");
        Self::parse(&source, &origin)
    }

    /// Parses a catalog from an in-memory TOML string.
    pub fn from_toml(source: &str) -> Result<Self, ParseError> {
        Self::parse(source, "<string>")
    }

    /// Returns the catalog of the filters built into this crate.
    pub fn builtin() -> Result<Self, ParseError> {
        Self::parse(BUILTIN_CATALOG, "<builtin>")
    }

    fn parse(source: &str, origin: &str) -> Result<Self, ParseError> {
        let doc: CatalogDoc = toml::from_str(source).map_err(|source| ParseError::Toml {
            path: origin.to_string(),
            source,
        })?;
        let mut seen = HashSet::new();
        for filter in &doc.filters {
            if !seen.insert(filter.identifier.as_str()) {
                return Err(ParseError::Duplicate {
                    path: origin.to_string(),
                    identifier: filter.identifier.clone(),
                });
            }
        }
        Ok(Self {
            filters: doc.filters,
        })
    }

    /// Returns the filters in catalog order.
    pub fn filters(&self) -> &[FilterDefinition] {
        &self.filters
    }

    /// Looks up a filter by identifier.
    pub fn get(&self, identifier: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|f| f.identifier == identifier)
    }

    /// Number of filters in the catalog.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the catalog contains no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterates over the filters in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.filters.iter()
    }
}
