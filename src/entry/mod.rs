//! Script entries and the keyed container that holds them.

pub mod container;
pub mod placement;

pub use container::Container;
pub use placement::Placement;

/// Default `type` attribute for script elements.
pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";

/// Extra script attributes, rendered in insertion order.
pub type Attrs = Vec<(String, String)>;

/// One registered head-script entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEntry {
    /// Reference to an external script file.
    File {
        src: String,
        attrs: Attrs,
        script_type: String,
    },
    /// Literal script content embedded in the document.
    Inline {
        body: String,
        attrs: Attrs,
        script_type: String,
    },
}

impl ScriptEntry {
    /// File entry with default attributes and type.
    pub fn file(src: impl Into<String>) -> Self {
        Self::File {
            src: src.into(),
            attrs: Vec::new(),
            script_type: DEFAULT_SCRIPT_TYPE.into(),
        }
    }

    /// Inline entry with default attributes and type.
    pub fn inline(body: impl Into<String>) -> Self {
        Self::Inline {
            body: body.into(),
            attrs: Vec::new(),
            script_type: DEFAULT_SCRIPT_TYPE.into(),
        }
    }

    /// Source URL for file entries, `None` for inline entries.
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::File { src, .. } => Some(src),
            Self::Inline { .. } => None,
        }
    }

    pub fn script_type(&self) -> &str {
        match self {
            Self::File { script_type, .. } | Self::Inline { script_type, .. } => script_type,
        }
    }

    pub fn attrs(&self) -> &Attrs {
        match self {
            Self::File { attrs, .. } | Self::Inline { attrs, .. } => attrs,
        }
    }

    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Entries failing this check are dropped at render time, never reported
    /// as hard errors.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::File { src, script_type, .. } => !src.is_empty() && !script_type.is_empty(),
            Self::Inline { script_type, .. } => !script_type.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry() {
        let entry = ScriptEntry::file("/js/a.js");
        assert_eq!(entry.src(), Some("/js/a.js"));
        assert_eq!(entry.script_type(), "text/javascript");
        assert!(entry.attrs().is_empty());
        assert!(entry.is_file());
        assert!(entry.is_valid());
    }

    #[test]
    fn test_inline_entry() {
        let entry = ScriptEntry::inline("alert(1)");
        assert_eq!(entry.src(), None);
        assert!(!entry.is_file());
        assert!(entry.is_valid());
    }

    #[test]
    fn test_invalid_without_type() {
        let entry = ScriptEntry::File {
            src: "/js/a.js".into(),
            attrs: Vec::new(),
            script_type: String::new(),
        };
        assert!(!entry.is_valid());

        let entry = ScriptEntry::Inline {
            body: "alert(1)".into(),
            attrs: Vec::new(),
            script_type: String::new(),
        };
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_invalid_without_src() {
        let entry = ScriptEntry::File {
            src: String::new(),
            attrs: Vec::new(),
            script_type: DEFAULT_SCRIPT_TYPE.into(),
        };
        assert!(!entry.is_valid());
    }
}
