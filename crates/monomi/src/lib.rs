//! # Monomi - Jinja Filter Catalog & Documentation Renderer
//!
//! `monomi` loads a catalog of template filters from a TOML file, renders each
//! filter's usage examples through a MiniJinja environment, and emits a single
//! Markdown document showing every filter's heading, documentation, raw
//! template, and rendered output.
//!
//! ## Core Concepts
//!
//! - [`FilterCatalog`]: Ordered collection of filter definitions loaded from TOML
//! - [`Environment`]: MiniJinja environment with strict undefined handling and
//!   the built-in text filters registered
//! - [`DocsEmitter`]: Renders a catalog into documentation, governed by a
//!   [`RenderPolicy`] for failing examples
//!
//! ## Quick Start
//!
//! ```rust
//! use monomi::{DocsEmitter, Environment, FilterCatalog};
//!
//! let catalog = FilterCatalog::from_toml(r#"
//! [[filters]]
//! identifier = "upper"
//! documentation = "Uppercases text"
//!
//! [filters.examples.basic]
//! template = "{{ 'abc' | upper }}"
//! "#).unwrap();
//!
//! let env = Environment::new();
//! let doc = DocsEmitter::new(&env).emit(&catalog).unwrap();
//! assert!(doc.contains("## upper"));
//! assert!(doc.contains("ABC"));
//! ```
//!
//! ## Built-in Filters
//!
//! The environment registers `removesuffix`, `removeprefix`, `lstrip`,
//! `rstrip`, and `slugify` on top of MiniJinja's own filters. The shipped
//! catalog ([`BUILTIN_CATALOG`]) documents them through the same pipeline.

pub mod catalog;
pub mod docs;
pub mod engine;
mod error;
pub mod filters;

pub use catalog::{ExampleEntry, FilterCatalog, FilterDefinition, BUILTIN_CATALOG};
pub use docs::{DocsEmitter, RenderPolicy};
pub use engine::Environment;
pub use error::{ParseError, RenderError};
pub use filters::register_filters;
