//! Head-script aggregation for HTML layouts.
//!
//! A layout registers external script files and inline script blocks in the
//! order it wants them; rendering folds every file reference into a single
//! request URL for a combining/minifying endpoint and emits the inline blocks
//! after it:
//!
//! ```
//! use minhead::{HeadScript, RenderContext};
//!
//! let mut head = HeadScript::new();
//! head.append_file("/js/main.js")?
//!     .append_file("/js/jquery.js")?
//!     .append_script("init();");
//!
//! let html = head.render(&RenderContext::new(""));
//! assert!(html.starts_with(
//!     "<script type=\"text/javascript\" src=\"/min/?f=js/main.js,js/jquery.js\">"
//! ));
//! # Ok::<(), minhead::HeadScriptError>(())
//! ```
//!
//! The minify endpoint itself (concatenation, compression) is a separate
//! service; this crate only builds the URL the browser will fetch.

pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod headscript;
mod utils;

pub use config::MinifyConfig;
pub use context::RenderContext;
pub use entry::{Attrs, Placement, ScriptEntry};
pub use error::{HeadScriptError, Result};
pub use headscript::{HeadScript, Indent, RenderDiagnostics, SkipReason, SkippedEntry};
