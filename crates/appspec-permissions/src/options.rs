//! # Rule Options
//!
//! Typed replacement for the loose options bag a permission entry is built
//! from. Every field is optional; [`RuleOptions::default`] carries the
//! documented defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::acl::AclSet;
use crate::entry::EntryKind;

/// Pattern that matches the object and everything below it.
pub const MATCH_ALL: &str = "**";

/// SELinux security context applied to matching entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelinuxContext {
    /// SELinux user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SELinux type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional MLS/MCS range, e.g. `s0:c0.c255`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

/// Options for building a [`PermissionRule`](crate::rule::PermissionRule).
///
/// # Example
///
/// ```
/// use appspec_permissions::entry::EntryKind;
/// use appspec_permissions::options::RuleOptions;
///
/// let options = RuleOptions::default()
///     .with_pattern("*.conf")
///     .with_except(["secret.conf"])
///     .with_types([EntryKind::File]);
/// assert_eq!(options.pattern, "*.conf");
/// ```
#[derive(Debug, Clone)]
pub struct RuleOptions {
    /// Glob applied to the path relative to the object.
    pub pattern: String,
    /// Globs that exclude a path even when `pattern` matched.
    pub except: Vec<String>,
    /// Entry kinds the rule applies to.
    pub types: HashSet<EntryKind>,
    /// Owning user name.
    pub owner: Option<String>,
    /// Owning group name.
    pub group: Option<String>,
    /// Octal mode string, e.g. `0644`.
    pub mode: Option<String>,
    /// ACL settings.
    pub acls: Option<Arc<dyn AclSet>>,
    /// SELinux context.
    pub context: Option<SelinuxContext>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL.to_string(),
            except: Vec::new(),
            types: EntryKind::all().into_iter().collect(),
            owner: None,
            group: None,
            mode: None,
            acls: None,
            context: None,
        }
    }
}

impl RuleOptions {
    /// Set the pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the exception patterns.
    pub fn with_except<I, S>(mut self, except: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = except.into_iter().map(Into::into).collect();
        self
    }

    /// Set the entry kinds the rule applies to.
    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = EntryKind>,
    {
        self.types = types.into_iter().collect();
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Set the ACL settings.
    pub fn with_acls(mut self, acls: impl AclSet + 'static) -> Self {
        self.acls = Some(Arc::new(acls));
        self
    }

    /// Set the SELinux context.
    pub fn with_context(mut self, context: SelinuxContext) -> Self {
        self.context = Some(context);
        self
    }
}
