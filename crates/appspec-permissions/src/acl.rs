//! # ACL Settings
//!
//! Permission rules carry ACL settings through untouched. The only question
//! asked of them here is whether they contain a default entry, since default
//! entries are only meaningful on directories.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// ACL settings attached to a permission rule.
pub trait AclSet: Debug + Send + Sync {
    /// The first default entry, if any.
    fn default_entry(&self) -> Option<&str>;

    /// Check whether the settings include a default entry.
    fn has_default_entry(&self) -> bool {
        self.default_entry().is_some()
    }
}

/// ACL entries in `setfacl` syntax, e.g. `user:deploy:rwx` or
/// `d:group:web:r-x`.
///
/// # Example
///
/// ```
/// use appspec_permissions::acl::{AclEntries, AclSet};
///
/// let acls = AclEntries::new(vec!["u:deploy:rw".to_string()]);
/// assert!(!acls.has_default_entry());
///
/// let acls = AclEntries::new(vec!["d:u:deploy:rw".to_string()]);
/// assert!(acls.has_default_entry());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AclEntries {
    entries: Vec<String>,
}

impl AclEntries {
    /// Wrap a list of entries.
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AclSet for AclEntries {
    fn default_entry(&self) -> Option<&str> {
        self.entries
            .iter()
            .map(|entry| entry.trim())
            .find(|entry| entry.starts_with("d:") || entry.starts_with("default:"))
    }
}

impl FromIterator<String> for AclEntries {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
