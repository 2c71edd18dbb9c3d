//! Template environment.
//!
//! [`Environment`] wraps a `minijinja::Environment` configured for
//! documentation rendering:
//!
//! - undefined variables are strict errors rather than empty output,
//! - `trim_blocks` is enabled,
//! - the built-in text filters are registered (see [`crate::filters`]).
//!
//! Templates can be rendered directly from strings or files, or registered by
//! name (inline or via filesystem search paths) and rendered with
//! [`Environment::render_named`].
//!
//! # Example
//!
//! ```rust
//! use monomi::Environment;
//!
//! let env = Environment::new();
//! let out = env
//!     .render_string("Hello, {{ name }}!", minijinja::context! { name => "World" })
//!     .unwrap();
//! assert_eq!(out, "Hello, World!");
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use minijinja::{UndefinedBehavior, Value};
use serde::Serialize;

use crate::error::RenderError;
use crate::filters;

/// A MiniJinja environment preconfigured for rendering filter documentation.
///
/// Rendering is a pure function of template source plus context: the
/// environment holds no mutable render state, and repeated renders of the
/// same input produce identical output.
pub struct Environment {
    env: minijinja::Environment<'static>,
    search_paths: Arc<RwLock<Vec<PathBuf>>>,
}

impl Environment {
    /// Creates an environment with strict undefined handling and the built-in
    /// filters registered.
    pub fn new() -> Self {
        let mut env = minijinja::Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        filters::register_filters(&mut env);

        let search_paths: Arc<RwLock<Vec<PathBuf>>> = Arc::default();
        let paths = Arc::clone(&search_paths);
        env.set_loader(move |name| {
            // Template names are caller-controlled; refuse path traversal.
            if name.contains("..") {
                return Ok(None);
            }
            let dirs = paths.read().unwrap_or_else(|e| e.into_inner());
            for dir in dirs.iter() {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return match std::fs::read_to_string(&candidate) {
                        Ok(source) => Ok(Some(source)),
                        Err(err) => Err(minijinja::Error::new(
                            minijinja::ErrorKind::InvalidOperation,
                            format!(
                                "failed to read template {}: {err}",
                                candidate.display()
                            ),
                        )),
                    };
                }
            }
            Ok(None)
        });

        Self { env, search_paths }
    }

    /// Renders a template string with the given context.
    pub fn render_string<S: Serialize>(
        &self,
        source: &str,
        context: S,
    ) -> Result<String, RenderError> {
        let value = Value::from_serialize(&context);
        Ok(self.env.render_str(source, value)?)
    }

    /// Reads a template from the filesystem and renders it.
    pub fn render_file<S: Serialize>(
        &self,
        path: impl AsRef<Path>,
        context: S,
    ) -> Result<String, RenderError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.render_string(&source, context)
    }

    /// Renders a registered template by name.
    ///
    /// The template must have been added via [`add_template`](Self::add_template)
    /// or be resolvable through a search path added via
    /// [`add_template_path`](Self::add_template_path).
    pub fn render_named<S: Serialize>(
        &self,
        name: &str,
        context: S,
    ) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;
        let value = Value::from_serialize(&context);
        Ok(template.render(value)?)
    }

    /// Registers an inline template under a name at runtime.
    ///
    /// Inline templates take precedence over search-path lookups.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Appends a filesystem search path for named templates.
    ///
    /// Paths are consulted in registration order; the first path containing a
    /// file matching the template name wins. Adding the same path twice is a
    /// no-op.
    pub fn add_template_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut dirs = self.search_paths.write().unwrap_or_else(|e| e.into_inner());
        if !dirs.contains(&path) {
            log::debug!("adding template search path {}", path.display());
            dirs.push(path);
        }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &minijinja::Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment,
    /// for registering additional filters, functions or globals.
    pub fn environment_mut(&mut self) -> &mut minijinja::Environment<'static> {
        &mut self.env
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
