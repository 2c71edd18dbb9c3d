//! Error types for catalog loading and template rendering.
//!
//! Two error families cover the crate's failure modes: [`ParseError`] for
//! anything that goes wrong while reading a filter catalog, and
//! [`RenderError`] for template execution failures. Catalog errors are always
//! fatal; render errors can be recovered per example depending on the
//! [`RenderPolicy`](crate::docs::RenderPolicy) in effect.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a filter catalog.
///
/// Every variant carries the catalog origin (a file path, or `"<string>"` for
/// in-memory sources) so failures can be traced back to the offending
/// resource. Parsing happens in full before any rendering starts, so a
/// malformed catalog never produces partial output.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The catalog resource could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or is missing a required field.
    ///
    /// The deserializer's message names the offending field (e.g.
    /// `missing field 'identifier'`).
    #[error("invalid catalog {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Two filter definitions share the same identifier.
    #[error("duplicate filter identifier '{identifier}' in catalog {path}")]
    Duplicate { path: String, identifier: String },
}

/// Errors raised while rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error, undefined variable, unknown filter, or any
    /// other execution failure reported by the engine.
    #[error("template error: {source}")]
    Template {
        #[source]
        source: minijinja::Error,
    },

    /// A named template was not registered and not found on any search path.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A template file could not be read from disk.
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog example failed to render.
    ///
    /// Wraps the underlying failure with the filter identifier and example
    /// name so the offending catalog entry can be located directly.
    #[error("example '{example}' of filter '{filter}' failed: {source}")]
    Example {
        filter: String,
        example: String,
        #[source]
        source: Box<RenderError>,
    },
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => {
                RenderError::TemplateNotFound(err.to_string())
            }
            _ => RenderError::Template { source: err },
        }
    }
}
