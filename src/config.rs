//! Aggregator configuration, embeddable as a `[minify]` table in a site
//! config file.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Render configuration, read-only during a render pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MinifyConfig {
    /// Minify service path, appended to the resolved base URL.
    pub min_path: String,
    /// Separator between rendered items.
    pub separator: String,
    /// Default indentation for inline entries, overridable per render call.
    pub indent: String,
    /// CDATA fallback for [`render_default`](crate::HeadScript::render_default),
    /// when no document context supplies the strict-markup flag.
    pub use_cdata: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            min_path: "/min/".into(),
            separator: "\n".into(),
            indent: String::new(),
            use_cdata: false,
        }
    }
}

impl MinifyConfig {
    /// Parse from a TOML document containing an optional `[minify]` table.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct Root {
            minify: MinifyConfig,
        }

        Ok(toml::from_str::<Root>(input)?.minify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeadScriptError;

    fn test_parse(extra: &str) -> MinifyConfig {
        MinifyConfig::from_toml_str(extra).expect("config should parse")
    }

    #[test]
    fn test_defaults() {
        let config = test_parse("");
        assert_eq!(config.min_path, "/min/");
        assert_eq!(config.separator, "\n");
        assert_eq!(config.indent, "");
        assert!(!config.use_cdata);
    }

    #[test]
    fn test_min_path() {
        let config = test_parse("[minify]\nmin_path = \"/assets/min/\"");
        assert_eq!(config.min_path, "/assets/min/");
    }

    #[test]
    fn test_separator_and_indent() {
        let config = test_parse("[minify]\nseparator = \"\\r\\n\"\nindent = \"    \"");
        assert_eq!(config.separator, "\r\n");
        assert_eq!(config.indent, "    ");
    }

    #[test]
    fn test_use_cdata() {
        let config = test_parse("[minify]\nuse_cdata = true");
        assert!(config.use_cdata);
    }

    #[test]
    fn test_invalid_toml() {
        let err = MinifyConfig::from_toml_str("[minify\nmin_path = 3").unwrap_err();
        assert!(matches!(err, HeadScriptError::Toml(_)));
    }
}
