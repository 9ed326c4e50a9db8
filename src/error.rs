//! Error types for registration and config parsing.

use thiserror::Error;

/// Errors surfaced by the head-script aggregator.
///
/// Rendering itself never fails: malformed entries are dropped at render time
/// and optionally reported through
/// [`RenderDiagnostics`](crate::RenderDiagnostics). The only checked failure
/// is registering a file entry without a source.
#[derive(Debug, Error)]
pub enum HeadScriptError {
    /// A file entry was registered with an empty source.
    #[error("invalid script spec: file entries require a non-empty source")]
    InvalidSpec,

    /// Config table parsing error.
    #[error("minify config parsing error")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HeadScriptError>;
