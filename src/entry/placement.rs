//! Entry placement modes.

/// Where a new entry lands relative to existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Insert after all existing entries.
    #[default]
    Append,
    /// Insert before all existing entries.
    Prepend,
    /// Clear all existing entries, then insert.
    Set,
}
