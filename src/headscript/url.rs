//! Combined minify URL assembly.
//!
//! The minify endpoint takes `f` (comma-separated relative file paths) and
//! optionally `b` (a base path prefix applied to every file). Only the URL is
//! built here; the endpoint does the actual concatenation and minification.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Query-component escaping that keeps the endpoint's `f=` syntax readable:
/// `,` separates manifest entries and `/` stays literal inside relative
/// paths.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Turn a registered source into a manifest path: strip the base URL prefix,
/// then a single leading separator.
pub fn relative_path(src: &str, base_url: &str) -> String {
    let rest = if base_url.is_empty() {
        src
    } else {
        src.strip_prefix(base_url).unwrap_or(src)
    };
    rest.strip_prefix('/').unwrap_or(rest).to_string()
}

/// Strip one leading path separator from the base URL.
pub fn normalize_base(base_url: &str) -> &str {
    base_url.strip_prefix('/').unwrap_or(base_url)
}

/// Build the single combined URL for the minify service. Manifest order is
/// preserved as given.
pub fn combined_url(base_url: &str, min_path: &str, manifest: &[String]) -> String {
    let files = manifest
        .iter()
        .map(|p| utf8_percent_encode(p, QUERY).to_string())
        .collect::<Vec<_>>()
        .join(",");
    let service = format!("{base_url}{min_path}");
    let base = normalize_base(base_url);
    if base.is_empty() {
        format!("{service}?f={files}")
    } else {
        format!("{service}?b={}&f={files}", utf8_percent_encode(base, QUERY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_relative_path_strips_base_and_slash() {
        assert_eq!(relative_path("/js/a.js", ""), "js/a.js");
        assert_eq!(relative_path("/app/js/a.js", "/app"), "js/a.js");
        // sources outside the base keep everything but the leading slash
        assert_eq!(relative_path("/js/a.js", "/app"), "js/a.js");
        assert_eq!(relative_path("js/a.js", ""), "js/a.js");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/app"), "app");
        assert_eq!(normalize_base("app"), "app");
    }

    #[test]
    fn test_combined_url_empty_base() {
        let manifest = paths(&["js/a.js", "js/b.js"]);
        assert_eq!(
            combined_url("", "/min/", &manifest),
            "/min/?f=js/a.js,js/b.js"
        );
    }

    #[test]
    fn test_combined_url_with_base() {
        let manifest = paths(&["js/a.js", "js/b.js"]);
        assert_eq!(
            combined_url("/app", "/min/", &manifest),
            "/app/min/?b=app&f=js/a.js,js/b.js"
        );
    }

    #[test]
    fn test_combined_url_empty_manifest() {
        assert_eq!(combined_url("", "/min/", &[]), "/min/?f=");
        assert_eq!(combined_url("/app", "/min/", &[]), "/app/min/?b=app&f=");
    }

    #[test]
    fn test_query_encoding_keeps_separators() {
        let manifest = paths(&["js/my lib.js", "js/a&b.js"]);
        assert_eq!(
            combined_url("", "/min/", &manifest),
            "/min/?f=js/my%20lib.js,js/a%26b.js"
        );
    }
}
