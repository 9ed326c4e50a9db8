//! Ambient render inputs, made explicit.
//!
//! The base URL and the document's markup strictness are things a web
//! framework usually keeps in globals (front controller, doctype registry).
//! Here they travel with the render call so the aggregator stays a pure
//! function of its inputs.

/// Read-only environment for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Site base URL prefix, e.g. `/app`. Stripped from registered file
    /// sources when building the manifest and passed to the minify endpoint
    /// as its `b` parameter.
    pub base_url: String,
    /// Strict-markup (XHTML-style) documents wrap inline bodies in CDATA
    /// markers instead of HTML comment markers.
    pub strict_markup: bool,
}

impl RenderContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            strict_markup: false,
        }
    }

    pub fn with_strict_markup(mut self, strict: bool) -> Self {
        self.strict_markup = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = RenderContext::default();
        assert!(ctx.base_url.is_empty());
        assert!(!ctx.strict_markup);
    }

    #[test]
    fn test_builder() {
        let ctx = RenderContext::new("/app").with_strict_markup(true);
        assert_eq!(ctx.base_url, "/app");
        assert!(ctx.strict_markup);
    }
}
