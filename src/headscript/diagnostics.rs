//! Render-time diagnostics for silently skipped entries.
//!
//! Rendering is best-effort: a malformed entry must never abort a page
//! render, so skips are recorded here instead of surfacing as errors.

use owo_colors::OwoColorize;
use std::fmt;

/// Why an entry was dropped from the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty `type` attribute.
    MissingType,
    /// File entry whose source is empty.
    MissingSource,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingType => "entry has an empty type attribute",
            Self::MissingSource => "file entry has an empty source",
        }
    }
}

/// One skipped entry, identified by its insertion key.
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub key: i64,
    pub reason: SkipReason,
}

/// Collects skipped entries during a render pass.
///
/// Pass one to [`render_with_diagnostics`](crate::HeadScript::render_with_diagnostics)
/// to observe what plain `render` drops silently.
#[derive(Debug, Default)]
pub struct RenderDiagnostics {
    skipped: Vec<SkippedEntry>,
}

impl RenderDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn skip(&mut self, key: i64, reason: SkipReason) {
        self.skipped.push(SkippedEntry { key, reason });
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for RenderDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, skip) in self.skipped.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}{}{} {} {}",
                "[".dimmed(),
                format!("entry {}", skip.key).cyan(),
                "]".dimmed(),
                "→".red(),
                skip.reason.as_str()
            )?;
        }
        Ok(())
    }
}
