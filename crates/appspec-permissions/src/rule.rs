//! # Permission Rules
//!
//! A permission rule anchors at a filesystem object and selects entries
//! below it by pattern, minus any exceptions. Rules are built once from the
//! parsed AppSpec and never change afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;

use crate::acl::AclSet;
use crate::entry::EntryKind;
use crate::error::{ValidationError, ValidationResult};
use crate::glob::{matches_simple_glob, SEPARATOR};
use crate::options::{RuleOptions, SelinuxContext, MATCH_ALL};

/// A permission rule from the `permissions` section of an AppSpec.
///
/// # Example
///
/// ```
/// use appspec_permissions::options::RuleOptions;
/// use appspec_permissions::rule::PermissionRule;
///
/// let rule = PermissionRule::new(
///     "/app",
///     RuleOptions::default().with_pattern("*.conf").with_except(["secret.conf"]),
/// )
/// .unwrap();
///
/// assert!(rule.matches_pattern("/app/db.conf"));
/// assert!(rule.matches_except("/app/secret.conf"));
/// assert!(!rule.matches_pattern("/app/sub/db.conf"));
/// ```
#[derive(Debug, Clone)]
pub struct PermissionRule {
    object: String,
    pattern: String,
    except: Vec<String>,
    types: HashSet<EntryKind>,
    owner: Option<String>,
    group: Option<String>,
    mode: Option<String>,
    acls: Option<Arc<dyn AclSet>>,
    context: Option<SelinuxContext>,
}

impl PermissionRule {
    /// Build a rule anchored at `object`.
    ///
    /// Only the object is checked here; shape checks are run explicitly with
    /// [`validate_file_shape`](Self::validate_file_shape) and friends.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingObject`] if `object` is empty.
    pub fn new(object: impl Into<String>, options: RuleOptions) -> ValidationResult<Self> {
        let object = object.into();
        if object.is_empty() {
            return Err(ValidationError::MissingObject);
        }

        let RuleOptions {
            pattern,
            except,
            types,
            owner,
            group,
            mode,
            acls,
            context,
        } = options;

        Ok(Self {
            object,
            pattern,
            except,
            types,
            owner,
            group,
            mode,
            acls,
            context,
        })
    }

    /// Object path the rule is anchored at, as declared.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Pattern applied below the object.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Exception patterns.
    pub fn except(&self) -> &[String] {
        &self.except
    }

    /// Entry kinds the rule applies to.
    pub fn types(&self) -> &HashSet<EntryKind> {
        &self.types
    }

    /// Owning user name.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Owning group name.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Mode string.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// ACL settings.
    pub fn acls(&self) -> Option<&dyn AclSet> {
        self.acls.as_deref()
    }

    /// SELinux context.
    pub fn context(&self) -> Option<&SelinuxContext> {
        self.context.as_ref()
    }

    /// Check whether the rule applies to entries of `kind`.
    pub fn applies_to_kind(&self, kind: EntryKind) -> bool {
        self.types.contains(&kind)
    }

    /// Check that a rule applying to files uses neither a sub-pattern nor
    /// exceptions.
    pub fn validate_file_shape(&self) -> ValidationResult<()> {
        if !self.applies_to_kind(EntryKind::File) {
            return Ok(());
        }
        if self.pattern != MATCH_ALL {
            return Err(ValidationError::InvalidFilePattern {
                object: self.object.clone(),
                pattern: self.pattern.clone(),
            });
        }
        if !self.except.is_empty() {
            return Err(ValidationError::InvalidFileExcept {
                object: self.object.clone(),
                except: self.except.clone(),
            });
        }
        Ok(())
    }

    /// Check that no default ACL entry is applied to a plain file.
    ///
    /// Call this only when the rule is being applied to a file; `target` is
    /// the label reported in the error.
    pub fn validate_file_acl(&self, target: &str) -> ValidationResult<()> {
        match &self.acls {
            Some(acls) if acls.has_default_entry() => Err(ValidationError::DefaultAclOnFile {
                object: target.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Check that every exception pattern stays within a single segment.
    ///
    /// Such a pattern could never match a remainder, so it is rejected rather
    /// than silently ignored.
    pub fn validate_except_patterns(&self) -> ValidationResult<()> {
        match self.except.iter().find(|pattern| pattern.contains(SEPARATOR)) {
            Some(pattern) => Err(ValidationError::InvalidExceptPattern {
                object: self.object.clone(),
                pattern: pattern.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Absolute form of the object, terminated by exactly one separator.
    pub fn anchor(&self) -> String {
        let mut anchor = expand_path(&self.object);
        if !anchor.ends_with(SEPARATOR) {
            anchor.push(SEPARATOR);
        }
        anchor
    }

    /// Check whether `name` lies below the object and matches the pattern.
    pub fn matches_pattern(&self, name: &str) -> bool {
        match self.remainder(name) {
            Some(_) if self.pattern == MATCH_ALL => true,
            Some(rest) => matches_simple_glob(&rest, &self.pattern),
            None => false,
        }
    }

    /// Check whether `name` lies below the object and matches any exception.
    pub fn matches_except(&self, name: &str) -> bool {
        match self.remainder(name) {
            Some(rest) => self
                .except
                .iter()
                .any(|pattern| matches_simple_glob(&rest, pattern)),
            None => false,
        }
    }

    /// Check whether the rule governs `name`, an entry of `kind`.
    pub fn applies_to(&self, name: &str, kind: EntryKind) -> bool {
        self.applies_to_kind(kind) && self.matches_pattern(name) && !self.matches_except(name)
    }

    /// Part of `name` that follows the anchor, or `None` outside it.
    fn remainder(&self, name: &str) -> Option<String> {
        let name = name.strip_suffix(SEPARATOR).unwrap_or(name);
        let anchor = self.anchor();
        name.strip_prefix(anchor.as_str()).map(str::to_string)
    }
}

/// Expand `path` to an absolute path.
///
/// `~` expands to the home directory, relative paths are resolved against
/// the current directory and `.`/`..` segments are folded lexically. The
/// result never ends with a separator unless it is the root.
pub fn expand_path(path: &str) -> String {
    let expanded = expand_home(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to resolve current directory");
                expanded
            }
        }
    };
    normalize(&absolute)
}

fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with(SEPARATOR) => rest.trim_start_matches(SEPARATOR),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => {
            tracing::warn!(path = %path, "No home directory to expand");
            PathBuf::from(path)
        }
    }
}

fn normalize(path: &Path) -> String {
    path_to_string(&path.clean())
}

fn path_to_string(path: &Path) -> String {
    match path.to_str() {
        Some(text) => text.to_string(),
        None => {
            let lossy = path.to_string_lossy().into_owned();
            tracing::warn!(path = %lossy, "Path is not valid UTF-8, matching against a lossy form");
            lossy
        }
    }
}
