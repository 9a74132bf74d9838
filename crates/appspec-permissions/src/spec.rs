//! # Permission Specs
//!
//! Serde shape of one entry in the `permissions` section of an AppSpec
//! document. Entries are turned into [`PermissionRule`]s with
//! [`PermissionSpec::into_rule`].
//!
//! ```text
//! permissions:
//!   - object: /var/www/app
//!     pattern: "*.conf"
//!     except: [secret.conf]
//!     owner: deploy
//!     mode: 640
//!     type: [file]
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::acl::AclEntries;
use crate::entry::EntryKind;
use crate::error::ValidationResult;
use crate::options::{RuleOptions, SelinuxContext};
use crate::rule::PermissionRule;

/// One declared permission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PermissionSpec {
    /// Object path the permission is anchored at.
    #[serde(default)]
    pub object: String,
    /// Glob applied below the object; `**` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Exception globs; empty when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<String>>,
    /// Entry kinds the permission applies to; both when absent.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<EntryKind>>,
    /// Owning user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Owning group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Mode, given either as a string (`"0644"`) or a bare number (`644`).
    #[serde(
        default,
        deserialize_with = "deserialize_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<String>,
    /// ACL entries in `setfacl` syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acls: Option<AclEntries>,
    /// SELinux context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<SelinuxContext>,
}

impl PermissionSpec {
    /// Build the rule this entry declares.
    ///
    /// # Example
    ///
    /// ```
    /// use appspec_permissions::spec::PermissionSpec;
    ///
    /// let spec: PermissionSpec = serde_json::from_str(
    ///     r#"{"object": "/app", "pattern": "*.log", "type": ["directory"]}"#,
    /// )
    /// .unwrap();
    /// let rule = spec.into_rule().unwrap();
    /// assert_eq!(rule.pattern(), "*.log");
    /// ```
    pub fn into_rule(self) -> ValidationResult<PermissionRule> {
        let mut options = RuleOptions::default();
        if let Some(pattern) = self.pattern {
            options = options.with_pattern(pattern);
        }
        if let Some(except) = self.except {
            options = options.with_except(except);
        }
        if let Some(types) = self.types {
            options = options.with_types(types);
        }
        if let Some(owner) = self.owner {
            options = options.with_owner(owner);
        }
        if let Some(group) = self.group {
            options = options.with_group(group);
        }
        if let Some(mode) = self.mode {
            options = options.with_mode(mode);
        }
        if let Some(acls) = self.acls {
            options = options.with_acls(acls);
        }
        if let Some(context) = self.context {
            options = options.with_context(context);
        }
        PermissionRule::new(self.object, options)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMode {
    Text(String),
    Number(u64),
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawMode>::deserialize(deserializer)?.map(|mode| match mode {
        RawMode::Text(text) => text,
        RawMode::Number(number) => number.to_string(),
    }))
}
