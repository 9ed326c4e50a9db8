//! Render pass: one combined file item first, then inline entries.

use super::HeadScript;
use super::diagnostics::{RenderDiagnostics, SkipReason};
use super::url;
use crate::context::RenderContext;
use crate::entry::{Attrs, ScriptEntry};
use crate::utils::html::escape_attr;

/// Escape markers for inline bodies in strict-markup documents.
const CDATA_MARKERS: (&str, &str) = ("//<![CDATA[", "//]]>");
/// Escape markers for inline bodies in plain HTML documents.
const COMMENT_MARKERS: (&str, &str) = ("//<!--", "//-->");

/// Indentation for inline entries, either literal whitespace or a space
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indent {
    Literal(String),
    Spaces(usize),
}

impl Indent {
    fn resolve(&self) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Spaces(n) => " ".repeat(*n),
        }
    }
}

impl From<usize> for Indent {
    fn from(n: usize) -> Self {
        Self::Spaces(n)
    }
}

impl From<&str> for Indent {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for Indent {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

pub(super) fn render(
    hs: &HeadScript,
    ctx: &RenderContext,
    indent: Option<&Indent>,
    diag: &mut RenderDiagnostics,
) -> String {
    let config = hs.config();
    let indent = indent
        .map(Indent::resolve)
        .unwrap_or_else(|| config.indent.clone());
    let (escape_start, escape_end) = if ctx.strict_markup {
        CDATA_MARKERS
    } else {
        COMMENT_MARKERS
    };

    // First pass, raw insertion order: collect the file manifest. Invalid
    // entries are dropped here and only reported through the diagnostics
    // sink.
    let mut manifest = Vec::new();
    for (key, entry) in hs.container().iter_keyed() {
        if !entry.is_valid() {
            diag.skip(key, skip_reason(entry));
            continue;
        }
        if let Some(src) = entry.src() {
            manifest.push(url::relative_path(src, &ctx.base_url));
        }
    }

    // The combined item is always emitted, even with an empty manifest, and
    // always renders bare (no indent, no escape wrapping).
    let combined = url::combined_url(&ctx.base_url, &config.min_path, &manifest);
    let mut items = vec![file_item(&combined)];

    // Second pass, key order: inline entries only.
    for (_, entry) in hs.container().sorted() {
        if entry.is_file() || !entry.is_valid() {
            continue;
        }
        if let ScriptEntry::Inline {
            body,
            attrs,
            script_type,
        } = entry
        {
            items.push(inline_item(
                body,
                attrs,
                script_type,
                &indent,
                escape_start,
                escape_end,
            ));
        }
    }

    items.join(&config.separator)
}

fn skip_reason(entry: &ScriptEntry) -> SkipReason {
    match entry.src() {
        Some(src) if src.is_empty() => SkipReason::MissingSource,
        _ => SkipReason::MissingType,
    }
}

/// The synthetic combined `<script src>` element.
fn file_item(src: &str) -> String {
    format!("<script type=\"text/javascript\" src=\"{src}\"></script>")
}

fn inline_item(
    body: &str,
    attrs: &Attrs,
    script_type: &str,
    indent: &str,
    escape_start: &str,
    escape_end: &str,
) -> String {
    format!(
        "{indent}<script type=\"{}\"{}>\n{indent}{escape_start}\n{indent}{body}\n{indent}{escape_end}\n{indent}</script>",
        escape_attr(script_type),
        render_attrs(attrs),
    )
}

fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        if value.is_empty() {
            out.push_str(&format!(" {name}"));
        } else {
            out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_resolution() {
        assert_eq!(Indent::Spaces(4).resolve(), "    ");
        assert_eq!(Indent::Literal("\t".into()).resolve(), "\t");
        assert_eq!(Indent::from(2).resolve(), "  ");
        assert_eq!(Indent::from("\t"), Indent::Literal("\t".into()));
    }

    #[test]
    fn test_file_item_is_bare() {
        assert_eq!(
            file_item("/min/?f=js/a.js"),
            "<script type=\"text/javascript\" src=\"/min/?f=js/a.js\"></script>"
        );
    }

    #[test]
    fn test_inline_item_wrapping() {
        let item = inline_item(
            "alert(1)",
            &Vec::new(),
            "text/javascript",
            "  ",
            "//<!--",
            "//-->",
        );
        assert_eq!(
            item,
            "  <script type=\"text/javascript\">\n  //<!--\n  alert(1)\n  //-->\n  </script>"
        );
    }

    #[test]
    fn test_render_attrs() {
        let attrs = vec![
            ("defer".to_string(), String::new()),
            ("data-x".to_string(), "a\"b".to_string()),
        ];
        assert_eq!(render_attrs(&attrs), " defer data-x=\"a&quot;b\"");
    }
}
