//! Built-in text filters.
//!
//! These are the filters documented by the built-in catalog
//! ([`BUILTIN_CATALOG`](crate::catalog::BUILTIN_CATALOG)). They complement
//! MiniJinja's own filter set with string operations the engine does not ship:
//! prefix/suffix removal, one-sided stripping with a custom character set, and
//! slug generation.
//!
//! All filters are pure functions over their inputs. They are registered
//! automatically by [`Environment::new`](crate::engine::Environment::new);
//! call [`register_filters`] directly when working with a raw
//! `minijinja::Environment`.

use minijinja::Environment;

/// Registers the built-in text filters on a MiniJinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("removesuffix", removesuffix);
    env.add_filter("removeprefix", removeprefix);
    env.add_filter("lstrip", lstrip);
    env.add_filter("rstrip", rstrip);
    env.add_filter("slugify", slugify);
}

/// Removes `suffix` from the end of `text` if present, otherwise returns the
/// text unchanged.
pub fn removesuffix(text: String, suffix: String) -> String {
    match text.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Removes `prefix` from the start of `text` if present, otherwise returns
/// the text unchanged.
pub fn removeprefix(text: String, prefix: String) -> String {
    match text.strip_prefix(&prefix) {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Strips characters from the beginning of a string.
///
/// With no argument, strips whitespace. With an argument, strips any leading
/// character contained in the given set (not the literal sequence).
pub fn lstrip(text: String, chars: Option<String>) -> String {
    match chars {
        Some(set) => text.trim_start_matches(|c: char| set.contains(c)).to_string(),
        None => text.trim_start().to_string(),
    }
}

/// Strips characters from the end of a string.
///
/// With no argument, strips whitespace. With an argument, strips any trailing
/// character contained in the given set (not the literal sequence).
pub fn rstrip(text: String, chars: Option<String>) -> String {
    match chars {
        Some(set) => text.trim_end_matches(|c: char| set.contains(c)).to_string(),
        None => text.trim_end().to_string(),
    }
}

/// Creates a slug for the given text.
///
/// The result only contains lowercase ASCII alphanumerics, underscores and
/// dots: the text is lowercased, every other character is replaced with an
/// underscore, and any leading run of non-alphanumeric, non-underscore,
/// non-`#` characters is removed.
pub fn slugify(text: String) -> String {
    let lowered = text.to_lowercase();
    let body: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    body.trim_start_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '#'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removesuffix_strips_matching_suffix() {
        assert_eq!(
            removesuffix("ropes.jinja".into(), ".jinja".into()),
            "ropes"
        );
    }

    #[test]
    fn removesuffix_leaves_nonmatching_text_unchanged() {
        assert_eq!(removesuffix("ropes".into(), ".jinja".into()), "ropes");
    }

    #[test]
    fn removeprefix_strips_matching_prefix() {
        assert_eq!(
            removeprefix("monomi.filters".into(), "monomi.".into()),
            "filters"
        );
    }

    #[test]
    fn removeprefix_leaves_nonmatching_text_unchanged() {
        assert_eq!(removeprefix("filters".into(), "monomi.".into()), "filters");
    }

    #[test]
    fn lstrip_defaults_to_whitespace() {
        assert_eq!(lstrip("  text ".into(), None), "text ");
    }

    #[test]
    fn lstrip_with_char_set() {
        assert_eq!(lstrip("xxyytext".into(), Some("xy".into())), "text");
    }

    #[test]
    fn rstrip_defaults_to_whitespace() {
        assert_eq!(rstrip(" text  ".into(), None), " text");
    }

    #[test]
    fn rstrip_with_char_set() {
        assert_eq!(rstrip("text--=".into(), Some("-=".into())), "text");
    }

    #[test]
    fn slugify_replaces_and_lowercases() {
        assert_eq!(slugify("Hello World!".into()), "hello_world_");
    }

    #[test]
    fn slugify_keeps_dots_and_underscores() {
        assert_eq!(slugify("some_file.txt".into()), "some_file.txt");
    }

    #[test]
    fn slugify_strips_leading_punctuation() {
        // Leading dots are removed even though dots are allowed elsewhere.
        assert_eq!(slugify("...section one".into()), "section_one");
    }

    #[test]
    fn filters_are_registered() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let out = env
            .render_str("{{ 'a.txt' | removesuffix('.txt') }}", minijinja::context! {})
            .unwrap();
        assert_eq!(out, "a");
    }
}
