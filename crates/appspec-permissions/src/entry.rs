//! # Entry Kinds
//!
//! The kinds of filesystem entry a permission rule can apply to.

use serde::{Deserialize, Serialize};

/// Kind of filesystem entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    #[serde(alias = "dir")]
    Directory,
}

impl EntryKind {
    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }

    /// Parse a kind from its string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use appspec_permissions::entry::EntryKind;
    ///
    /// assert_eq!(EntryKind::parse("file"), Some(EntryKind::File));
    /// assert_eq!(EntryKind::parse("dir"), Some(EntryKind::Directory));
    /// assert_eq!(EntryKind::parse("socket"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "file" => Some(EntryKind::File),
            "directory" | "dir" => Some(EntryKind::Directory),
            _ => None,
        }
    }

    /// Get all kinds.
    pub fn all() -> Vec<Self> {
        vec![EntryKind::File, EntryKind::Directory]
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
