//! The head-script aggregator.
//!
//! Lives for one page-render cycle: the layout registers entries, the
//! template renders once, the aggregator is dropped. Registration keeps the
//! container's insertion order; rendering folds every file entry into one
//! combined minify URL and emits inline entries after it.

pub mod diagnostics;
mod render;
mod url;

pub use diagnostics::{RenderDiagnostics, SkipReason, SkippedEntry};
pub use render::Indent;

use crate::config::MinifyConfig;
use crate::context::RenderContext;
use crate::entry::{Attrs, Container, DEFAULT_SCRIPT_TYPE, Placement, ScriptEntry};
use crate::error::{HeadScriptError, Result};

/// Script aggregator for one page render.
#[derive(Debug, Clone, Default)]
pub struct HeadScript {
    config: MinifyConfig,
    container: Container,
}

impl HeadScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MinifyConfig) -> Self {
        Self {
            config,
            container: Container::new(),
        }
    }

    pub fn config(&self) -> &MinifyConfig {
        &self.config
    }

    pub(crate) fn container(&self) -> &Container {
        &self.container
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register an external script file. Fails with
    /// [`HeadScriptError::InvalidSpec`] on an empty source, leaving the
    /// container untouched.
    pub fn register_file(
        &mut self,
        src: impl Into<String>,
        placement: Placement,
        attrs: Attrs,
        script_type: impl Into<String>,
    ) -> Result<&mut Self> {
        let src = src.into();
        if src.is_empty() {
            return Err(HeadScriptError::InvalidSpec);
        }
        self.place(
            ScriptEntry::File {
                src,
                attrs,
                script_type: script_type.into(),
            },
            placement,
        );
        Ok(self)
    }

    /// Register an inline script block. Never fails.
    pub fn register_inline(
        &mut self,
        body: impl Into<String>,
        placement: Placement,
        attrs: Attrs,
        script_type: impl Into<String>,
    ) -> &mut Self {
        self.place(
            ScriptEntry::Inline {
                body: body.into(),
                attrs,
                script_type: script_type.into(),
            },
            placement,
        );
        self
    }

    pub fn append_file(&mut self, src: impl Into<String>) -> Result<&mut Self> {
        self.register_file(src, Placement::Append, Vec::new(), DEFAULT_SCRIPT_TYPE)
    }

    pub fn prepend_file(&mut self, src: impl Into<String>) -> Result<&mut Self> {
        self.register_file(src, Placement::Prepend, Vec::new(), DEFAULT_SCRIPT_TYPE)
    }

    pub fn set_file(&mut self, src: impl Into<String>) -> Result<&mut Self> {
        self.register_file(src, Placement::Set, Vec::new(), DEFAULT_SCRIPT_TYPE)
    }

    pub fn append_script(&mut self, body: impl Into<String>) -> &mut Self {
        self.register_inline(body, Placement::Append, Vec::new(), DEFAULT_SCRIPT_TYPE)
    }

    pub fn prepend_script(&mut self, body: impl Into<String>) -> &mut Self {
        self.register_inline(body, Placement::Prepend, Vec::new(), DEFAULT_SCRIPT_TYPE)
    }

    pub fn set_script(&mut self, body: impl Into<String>) -> &mut Self {
        self.register_inline(body, Placement::Set, Vec::new(), DEFAULT_SCRIPT_TYPE)
    }

    /// Register a file at an explicit container key. Entries land in key
    /// order once the inline pass sorts the container.
    pub fn insert_file_at(&mut self, key: i64, src: impl Into<String>) -> Result<&mut Self> {
        let src = src.into();
        if src.is_empty() {
            return Err(HeadScriptError::InvalidSpec);
        }
        self.container.insert_at(key, ScriptEntry::file(src));
        Ok(self)
    }

    /// Register an inline block at an explicit container key.
    pub fn insert_script_at(&mut self, key: i64, body: impl Into<String>) -> &mut Self {
        self.container.insert_at(key, ScriptEntry::inline(body));
        self
    }

    fn place(&mut self, entry: ScriptEntry, placement: Placement) {
        match placement {
            Placement::Append => self.container.append(entry),
            Placement::Prepend => self.container.prepend(entry),
            Placement::Set => self.container.set(entry),
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the head fragment: the combined file item first, then every
    /// valid inline entry in key order, joined by the configured separator.
    pub fn render(&self, ctx: &RenderContext) -> String {
        render::render(self, ctx, None, &mut RenderDiagnostics::new())
    }

    /// Render without a document context: empty base URL, CDATA mode taken
    /// from the config fallback.
    pub fn render_default(&self) -> String {
        let ctx = RenderContext::new("").with_strict_markup(self.config.use_cdata);
        self.render(&ctx)
    }

    /// Render with an explicit indent, overriding the configured default.
    pub fn render_indented(&self, ctx: &RenderContext, indent: impl Into<Indent>) -> String {
        render::render(self, ctx, Some(&indent.into()), &mut RenderDiagnostics::new())
    }

    /// Render while collecting a record of every silently skipped entry.
    pub fn render_with_diagnostics(
        &self,
        ctx: &RenderContext,
        diag: &mut RenderDiagnostics,
    ) -> String {
        render::render(self, ctx, None, diag)
    }
}
