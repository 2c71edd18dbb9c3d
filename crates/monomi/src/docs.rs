//! Documentation emission.
//!
//! [`DocsEmitter`] turns a [`FilterCatalog`] into a single Markdown document.
//! For each filter, in catalog order, it emits:
//!
//! - a `##` heading with the filter identifier,
//! - the documentation text (omitted when empty),
//! - per example, in catalog order: the raw template in a `jinja` code block
//!   followed by the rendered result in a `text` code block.
//!
//! Examples render against an empty context; rendering never mutates the
//! catalog, so emission is deterministic.
//!
//! # Failure policy
//!
//! A failing example is governed by [`RenderPolicy`]:
//!
//! - [`RenderPolicy::Abort`] (default): emission stops and the error
//!   propagates. Nothing is written.
//! - [`RenderPolicy::Placeholder`]: the rendered block is replaced with a
//!   literal `error: ...` block naming the filter and example, a warning is
//!   logged, and emission continues. Failures are never silent.

use std::fmt::Write as _;

use crate::catalog::{ExampleEntry, FilterCatalog, FilterDefinition};
use crate::engine::Environment;
use crate::error::RenderError;

/// What to do when a catalog example fails to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Propagate the first [`RenderError`] and abort emission.
    #[default]
    Abort,
    /// Emit an `error:` block in place of the rendered output and continue.
    Placeholder,
}

/// Renders filter catalogs into Markdown documentation.
pub struct DocsEmitter<'a> {
    env: &'a Environment,
    policy: RenderPolicy,
}

impl<'a> DocsEmitter<'a> {
    /// Creates an emitter with the default [`RenderPolicy::Abort`] policy.
    pub fn new(env: &'a Environment) -> Self {
        Self::with_policy(env, RenderPolicy::Abort)
    }

    /// Creates an emitter with an explicit failure policy.
    pub fn with_policy(env: &'a Environment, policy: RenderPolicy) -> Self {
        Self { env, policy }
    }

    /// Emits the documentation for every filter in the catalog.
    ///
    /// Produces exactly one heading per filter and one rendered block per
    /// example, in catalog order. Filters without examples contribute only
    /// their heading and documentation text.
    pub fn emit(&self, catalog: &FilterCatalog) -> Result<String, RenderError> {
        let mut out = String::new();
        for filter in catalog.iter() {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "## {}", filter.identifier);
            if !filter.documentation.is_empty() {
                let _ = writeln!(out, "\n{}", filter.documentation.trim_end());
            }
            for (name, example) in &filter.examples {
                let _ = writeln!(out, "\n**{name}:**");
                let _ = writeln!(out, "\n```jinja\n{}\n```", example.template.trim_end());
                match self.render_example(filter, name, example) {
                    Ok(rendered) => {
                        let _ = writeln!(out, "\n```text\n{}\n```", rendered.trim_end());
                    }
                    Err(err) => match self.policy {
                        RenderPolicy::Abort => return Err(err),
                        RenderPolicy::Placeholder => {
                            log::warn!("{err}");
                            let _ = writeln!(out, "\n```text\nerror: {err}\n```");
                        }
                    },
                }
            }
        }
        Ok(out)
    }

    /// Renders every example without building a document.
    ///
    /// Fails on the first broken example regardless of policy. Intended for
    /// catalog linting in CI.
    pub fn check(&self, catalog: &FilterCatalog) -> Result<(), RenderError> {
        for filter in catalog.iter() {
            for (name, example) in &filter.examples {
                self.render_example(filter, name, example)?;
            }
        }
        Ok(())
    }

    fn render_example(
        &self,
        filter: &FilterDefinition,
        name: &str,
        example: &ExampleEntry,
    ) -> Result<String, RenderError> {
        self.env
            .render_string(&example.template, minijinja::context! {})
            .map_err(|err| RenderError::Example {
                filter: filter.identifier.clone(),
                example: name.to_string(),
                source: Box::new(err),
            })
    }
}
