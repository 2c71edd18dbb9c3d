//! End-to-end tests for the catalog -> render -> emit pipeline.

use monomi::{DocsEmitter, Environment, FilterCatalog, ParseError, RenderPolicy};

const CATALOG: &str = r#"
[[filters]]
identifier = "upper"
documentation = "Uppercases text"
group = "builtin"

[filters.examples.basic]
template = "{{ 'abc' | upper }}"

[filters.examples.sentence]
template = "{{ 'hello world' | upper }}"

[[filters]]
identifier = "removesuffix"
documentation = "Removes a suffix from text"
group = "text"

[filters.examples.basic]
template = '{{ "ropes.jinja" | removesuffix(".jinja") }}'

[[filters]]
identifier = "undocumented"
"#;

#[test]
fn full_pipeline_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filters.toml");
    std::fs::write(&path, CATALOG).unwrap();

    let catalog = FilterCatalog::from_path(&path).unwrap();
    let env = Environment::new();
    let doc = DocsEmitter::new(&env).emit(&catalog).unwrap();

    // One heading per filter, in catalog order.
    let headings: Vec<_> = doc.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(headings, ["## upper", "## removesuffix", "## undocumented"]);

    // One rendered block per example.
    assert_eq!(doc.matches("```text").count(), 3);

    // Rendered results appear literally.
    assert!(doc.contains("ABC"));
    assert!(doc.contains("HELLO WORLD"));
    assert!(doc.contains("ropes"));

    // Raw templates are shown as code blocks.
    assert!(doc.contains("{{ 'abc' | upper }}"));
    assert_eq!(doc.matches("```jinja").count(), 3);
}

#[test]
fn examples_render_in_document_order() {
    let catalog = FilterCatalog::from_toml(CATALOG).unwrap();
    let env = Environment::new();
    let doc = DocsEmitter::new(&env).emit(&catalog).unwrap();

    let basic = doc.find("**basic:**").unwrap();
    let sentence = doc.find("**sentence:**").unwrap();
    assert!(basic < sentence);
}

#[test]
fn rendering_is_idempotent() {
    let catalog = FilterCatalog::from_toml(CATALOG).unwrap();
    let env = Environment::new();
    let emitter = DocsEmitter::new(&env);
    let first = emitter.emit(&catalog).unwrap();
    let second = emitter.emit(&catalog).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_catalog_fails_before_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filters.toml");
    std::fs::write(
        &path,
        r#"
[[filters]]
documentation = "missing identifier"
"#,
    )
    .unwrap();

    let err = FilterCatalog::from_path(&path).unwrap_err();
    match err {
        ParseError::Toml { path: origin, source } => {
            assert!(origin.contains("filters.toml"));
            assert!(source.to_string().contains("identifier"));
        }
        other => panic!("expected Toml error, got {other:?}"),
    }
}

#[test]
fn zero_example_filter_emits_heading_only() {
    let catalog = FilterCatalog::from_toml(CATALOG).unwrap();
    let env = Environment::new();
    let doc = DocsEmitter::new(&env).emit(&catalog).unwrap();

    let section_start = doc.find("## undocumented").unwrap();
    let section = &doc[section_start..];
    assert!(!section.contains("```"));
}

#[test]
fn placeholder_policy_keeps_later_filters() {
    let source = r#"
[[filters]]
identifier = "broken"

[filters.examples.bad]
template = "{{ not_defined }}"

[[filters]]
identifier = "upper"

[filters.examples.basic]
template = "{{ 'abc' | upper }}"
"#;
    let catalog = FilterCatalog::from_toml(source).unwrap();
    let env = Environment::new();

    // Abort policy: nothing is emitted.
    assert!(DocsEmitter::new(&env).emit(&catalog).is_err());

    // Placeholder policy: the broken example is flagged, the rest renders.
    let doc = DocsEmitter::with_policy(&env, RenderPolicy::Placeholder)
        .emit(&catalog)
        .unwrap();
    assert!(doc.contains("error:"));
    assert!(doc.contains("## upper"));
    assert!(doc.contains("ABC"));
}

#[test]
fn builtin_catalog_documents_builtin_filters() {
    let catalog = FilterCatalog::builtin().unwrap();
    let env = Environment::new();
    let doc = DocsEmitter::new(&env).emit(&catalog).unwrap();

    assert!(doc.contains("## removesuffix"));
    assert!(doc.contains("## slugify"));
    // The removesuffix basic example renders "ropes.jinja" down to "ropes".
    assert!(doc.contains("\nropes\n"));
    assert!(doc.contains("hello_world"));
}
