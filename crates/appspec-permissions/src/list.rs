//! # Permission Lists
//!
//! The ordered `permissions` section of an AppSpec. A list is validated as a
//! whole: the first malformed rule rejects the entire section.

use crate::entry::EntryKind;
use crate::error::{ListError, ValidationResult};
use crate::rule::PermissionRule;
use crate::spec::PermissionSpec;

/// Ordered collection of permission rules.
///
/// # Example
///
/// ```
/// use appspec_permissions::entry::EntryKind;
/// use appspec_permissions::list::PermissionList;
///
/// let list = PermissionList::from_json(
///     r#"[
///         {"object": "/app", "pattern": "*.conf", "type": ["file", "directory"]},
///         {"object": "/app/bin", "mode": "0755"}
///     ]"#,
/// )
/// .unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert!(list.validate().is_err()); // a file rule can not use "*.conf"
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermissionList {
    rules: Vec<PermissionRule>,
}

impl PermissionList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build rules from parsed entries, stopping at the first bad one.
    pub fn from_specs<I>(specs: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = PermissionSpec>,
    {
        specs
            .into_iter()
            .map(PermissionSpec::into_rule)
            .collect::<ValidationResult<Vec<_>>>()
            .map(|rules| Self { rules })
    }

    /// Parse a JSON array of permission entries and build their rules.
    ///
    /// Shape validation is not run; call [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ListError> {
        let specs: Vec<PermissionSpec> = serde_json::from_str(json)?;
        Ok(Self::from_specs(specs)?)
    }

    /// Append a rule.
    pub fn add(&mut self, rule: PermissionRule) {
        self.rules.push(rule);
    }

    /// Get the count of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PermissionRule> {
        self.rules.iter()
    }

    /// Run the shape checks of every rule.
    pub fn validate(&self) -> ValidationResult<()> {
        for rule in &self.rules {
            if let Err(e) = rule
                .validate_file_shape()
                .and_then(|()| rule.validate_except_patterns())
            {
                tracing::warn!(object = %rule.object(), code = e.error_code(), "Rejected permission rule");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Rules that govern `name`, an entry of `kind`, in declaration order.
    pub fn matching(&self, name: &str, kind: EntryKind) -> Vec<&PermissionRule> {
        let matched: Vec<&PermissionRule> = self
            .rules
            .iter()
            .filter(|rule| rule.applies_to(name, kind))
            .collect();
        tracing::debug!(name = %name, kind = %kind, matched = matched.len(), "Resolved permission rules");
        matched
    }

    /// Check that the rules governing `name` can be applied to it.
    ///
    /// Default ACL entries are rejected on files; directories always pass.
    pub fn validate_target(&self, name: &str, kind: EntryKind) -> ValidationResult<()> {
        if kind != EntryKind::File {
            return Ok(());
        }
        for rule in self.matching(name, kind) {
            if let Err(e) = rule.validate_file_acl(name) {
                tracing::warn!(object = %rule.object(), target = %name, "Default ACL applied to file");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl FromIterator<PermissionRule> for PermissionList {
    fn from_iter<T: IntoIterator<Item = PermissionRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PermissionList {
    type Item = &'a PermissionRule;
    type IntoIter = std::slice::Iter<'a, PermissionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
