//! `monomi` command-line interface.
//!
//! Three subcommands cover the documentation workflow:
//!
//! - `monomi docs [CATALOG]` renders a filter catalog into Markdown (the
//!   built-in catalog when no path is given),
//! - `monomi check CATALOG` parses a catalog and renders every example,
//!   exiting nonzero on the first failure,
//! - `monomi render TEMPLATE` renders a template string or file with
//!   variables supplied via `-D key=value`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use monomi::{DocsEmitter, Environment, FilterCatalog, RenderPolicy};

#[derive(Parser)]
#[command(name = "monomi", version, about = "Jinja filter catalog documentation renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a filter catalog into Markdown documentation.
    Docs {
        /// Path to the catalog TOML file (defaults to the built-in catalog).
        catalog: Option<PathBuf>,

        /// Write the document to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to do when an example fails to render.
        #[arg(long, value_enum, default_value = "abort")]
        on_error: OnError,
    },

    /// Parse a catalog and render every example, reporting the first failure.
    Check {
        /// Path to the catalog TOML file.
        catalog: PathBuf,
    },

    /// Render a single template with the given variables.
    Render {
        /// Template source, or a file path when --file is given.
        template: String,

        /// Treat TEMPLATE as a file path.
        #[arg(long)]
        file: bool,

        /// Template variables as key=value pairs. Values that parse as JSON
        /// are passed through typed; everything else is a string.
        #[arg(short = 'D', long = "define", value_parser = parse_define)]
        defines: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnError {
    /// Abort on the first failing example.
    Abort,
    /// Emit an error placeholder block and continue.
    Placeholder,
}

impl From<OnError> for RenderPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => RenderPolicy::Abort,
            OnError::Placeholder => RenderPolicy::Placeholder,
        }
    }
}

fn parse_define(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Docs {
            catalog,
            output,
            on_error,
        } => docs(catalog, output, on_error.into()),
        Command::Check { catalog } => check(catalog),
        Command::Render {
            template,
            file,
            defines,
        } => render(template, file, defines),
    }
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<FilterCatalog> {
    match path {
        Some(path) => FilterCatalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => FilterCatalog::builtin().context("failed to load built-in catalog"),
    }
}

fn docs(
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    policy: RenderPolicy,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog.as_ref())?;
    let env = Environment::new();
    let doc = DocsEmitter::with_policy(&env, policy)
        .emit(&catalog)
        .context("failed to render documentation")?;

    match output {
        Some(path) => fs::write(&path, doc)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{doc}"),
    }
    Ok(())
}

fn check(catalog: PathBuf) -> anyhow::Result<()> {
    let catalog = load_catalog(Some(&catalog))?;
    let env = Environment::new();
    DocsEmitter::new(&env).check(&catalog)?;

    let examples: usize = catalog.iter().map(|f| f.examples.len()).sum();
    println!("ok: {} filters, {} examples", catalog.len(), examples);
    Ok(())
}

fn render(template: String, file: bool, defines: Vec<(String, String)>) -> anyhow::Result<()> {
    let mut vars = serde_json::Map::new();
    for (key, value) in defines {
        let value = serde_json::from_str(&value).unwrap_or(serde_json::Value::String(value));
        vars.insert(key, value);
    }

    let env = Environment::new();
    let rendered = if file {
        env.render_file(&template, &vars)
            .with_context(|| format!("failed to render template file {template}"))?
    } else {
        env.render_string(&template, &vars)
            .context("failed to render template")?
    };
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_define_splits_on_first_equals() {
        assert_eq!(
            parse_define("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn parse_define_rejects_missing_equals() {
        assert!(parse_define("name").is_err());
    }

    #[test]
    fn cli_parses_docs_command() {
        let cli = Cli::parse_from(["monomi", "docs", "filters.toml", "--on-error", "placeholder"]);
        match cli.command {
            Command::Docs {
                catalog, on_error, ..
            } => {
                assert_eq!(catalog, Some(PathBuf::from("filters.toml")));
                assert!(matches!(on_error, OnError::Placeholder));
            }
            _ => panic!("expected docs command"),
        }
    }

    #[test]
    fn cli_parses_render_defines() {
        let cli = Cli::parse_from(["monomi", "render", "{{ a }}", "-D", "a=1", "-D", "b=two"]);
        match cli.command {
            Command::Render { defines, .. } => {
                assert_eq!(defines.len(), 2);
                assert_eq!(defines[0], ("a".to_string(), "1".to_string()));
            }
            _ => panic!("expected render command"),
        }
    }
}
