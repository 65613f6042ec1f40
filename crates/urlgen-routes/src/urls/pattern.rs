//! Route path placeholders.
//!
//! A placeholder is a path segment that starts with `:` followed by one or
//! more name characters (`A-Z`, `a-z`, `0-9`, `-`, `_`). The name ends at
//! the first other character; whatever follows stays literal, so
//! `/:id.json` has the placeholder `id` and the suffix `.json`. A colon that
//! does not start a segment is never a placeholder.

use std::collections::HashMap;
use std::hash::BuildHasher;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The prefix that marks a placeholder segment.
pub const PARAM_PREFIX: char = ':';

/// Everything except `A-Za-z0-9-_.~` is escaped in a query component.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Splits a segment into `(name, suffix)` if it is a placeholder.
fn placeholder(segment: &str) -> Option<(&str, &str)> {
    let rest = segment.strip_prefix(PARAM_PREFIX)?;
    let end = rest.find(|c| !is_name_char(c)).unwrap_or(rest.len());
    (end > 0).then(|| rest.split_at(end))
}

/// Returns the placeholder names of an escaped path, one entry per
/// occurrence, left to right.
///
/// # Examples
///
/// ```
/// use urlgen_routes::urls::pattern::param_names;
///
/// assert_eq!(param_names("/a/:foo/b/:bar"), vec!["foo", "bar"]);
/// assert_eq!(param_names("/:foo/:foo"), vec!["foo", "foo"]);
/// assert!(param_names("/static/file:1").is_empty());
/// ```
pub fn param_names(path: &str) -> Vec<&str> {
    path.split('/')
        .skip(1)
        .filter_map(placeholder)
        .map(|(name, _)| name)
        .collect()
}

/// Escapes a value for use in a query component: spaces become `+` and
/// every byte outside `A-Za-z0-9-_.~` is percent-encoded.
///
/// # Examples
///
/// ```
/// use urlgen_routes::urls::pattern::query_escape;
///
/// assert_eq!(query_escape("Jane & Jon"), "Jane+%26+Jon");
/// ```
pub fn query_escape(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Replaces every placeholder in `path` with its query-escaped value.
///
/// Placeholders without an entry in `params` are left as they are; callers
/// check for missing names first.
pub fn substitute<S: BuildHasher>(path: &str, params: &HashMap<String, String, S>) -> String {
    let mut result = String::with_capacity(path.len());
    for (i, segment) in path.split('/').enumerate() {
        if i > 0 {
            result.push('/');
        }
        match placeholder(segment).filter(|_| i > 0) {
            Some((name, suffix)) => match params.get(name) {
                Some(value) => {
                    result.push_str(&query_escape(value));
                    result.push_str(suffix);
                }
                None => result.push_str(segment),
            },
            None => result.push_str(segment),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_param_names() {
        let cases: &[(&str, &[&str])] = &[
            ("", &[]),
            ("/", &[]),
            ("/foo", &[]),
            ("/:foo", &["foo"]),
            ("/:foo/bar", &["foo"]),
            ("/:foo/:bar", &["foo", "bar"]),
            ("/:foo/file%20one%26two/:bar", &["foo", "bar"]),
            ("/:Foo-123/file%20one%26two/:6b_aR", &["Foo-123", "6b_aR"]),
            ("/:foo/:foo", &["foo", "foo"]),
        ];
        for (path, want) in cases {
            assert_eq!(param_names(path), *want, "param_names({path:?})");
        }
    }

    #[test]
    fn test_param_names_needs_slash_before_colon() {
        assert!(param_names(":foo").is_empty());
        assert!(param_names("/a:foo").is_empty());
        assert!(param_names("/:").is_empty());
        assert!(param_names("/:.json").is_empty());
    }

    #[test]
    fn test_param_names_stops_at_non_name_char() {
        assert_eq!(param_names("/:id.json"), vec!["id"]);
        assert_eq!(param_names("/:a:b"), vec!["a"]);
    }

    #[test]
    fn test_query_escape() {
        assert_eq!(query_escape(""), "");
        assert_eq!(query_escape("one:two"), "one%3Atwo");
        assert_eq!(query_escape("a b  c"), "a+b++c");
        assert_eq!(query_escape("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(query_escape("-_.~*"), "-_.~%2A");
        assert_eq!(query_escape("100%"), "100%25");
        assert_eq!(query_escape("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_substitute_basic() {
        let p = params(&[("foo", "FOO"), ("bar", "BAR")]);
        assert_eq!(substitute("/a/:foo/b/:bar", &p), "/a/FOO/b/BAR");
    }

    #[test]
    fn test_substitute_repeated_name() {
        let p = params(&[("foo", "X")]);
        assert_eq!(substitute("/:foo/:foo", &p), "/X/X");
    }

    #[test]
    fn test_substitute_keeps_suffix_and_literals() {
        let p = params(&[("id", "7")]);
        assert_eq!(
            substitute("/file%3Aone/:id.json/a:id", &p),
            "/file%3Aone/7.json/a:id"
        );
    }

    #[test]
    fn test_substitute_name_prefix_of_other_name() {
        let p = params(&[("foo", "1"), ("foobar", "2")]);
        assert_eq!(substitute("/:foobar/:foo", &p), "/2/1");
    }

    #[test]
    fn test_substitute_unknown_left_alone() {
        let p = params(&[]);
        assert_eq!(substitute("/:foo", &p), "/:foo");
    }

    #[test]
    fn test_param_names_match_reference_pattern() {
        let re = regex::Regex::new(r"/:([a-zA-Z0-9\-_]+)").unwrap();
        for path in [
            "/",
            "/:a/b/:c",
            "/x:y/:z",
            "/:foo.json/:bar-baz_1/qux",
            "//:a",
            "/:a:b/:c",
            "/::a/:b",
        ] {
            let expected: Vec<&str> = re
                .captures_iter(path)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str())
                .collect();
            assert_eq!(param_names(path), expected, "param_names({path:?})");
        }
    }
}
