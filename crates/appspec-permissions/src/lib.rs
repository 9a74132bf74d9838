//! # AppSpec Permissions
//!
//! This crate describes the `permissions` section of a deployment
//! application specification (AppSpec) and decides which declared rule
//! governs which installed file or directory.
//!
//! ## Overview
//!
//! The appspec-permissions crate handles:
//! - **Rules**: An object path plus pattern, exceptions, entry kinds and
//!   pass-through ownership/mode/ACL/SELinux settings
//! - **Glob matching**: A single-segment `*` dialect evaluated without
//!   backtracking
//! - **Validation**: Shape checks that reject malformed sections before any
//!   file is touched
//! - **Documents**: Serde entries for the declarative section
//!
//! ## Matching
//!
//! ```text
//! object  = /app            anchor    = /app/
//! pattern = *.conf          candidate = /app/db.conf
//! except  = [secret.conf]   remainder = db.conf     -> matches
//!
//! /app/sub/db.conf -> remainder "sub/db.conf" spans two segments -> no match
//! ```
//!
//! The pattern `**` is a sentinel: it matches every path below the anchor
//! without further checks.
//!
//! ## Usage
//!
//! ```rust
//! use appspec_permissions::{EntryKind, PermissionRule, RuleOptions};
//!
//! let rule = PermissionRule::new(
//!     "/app",
//!     RuleOptions::default()
//!         .with_pattern("*.conf")
//!         .with_except(["secret.conf"])
//!         .with_types([EntryKind::Directory]),
//! )
//! .unwrap();
//! rule.validate_file_shape().unwrap();
//!
//! assert!(rule.matches_pattern("/app/db.conf"));
//! assert!(rule.matches_except("/app/secret.conf"));
//! assert!(!rule.matches_pattern("/app/sub/db.conf"));
//! ```
//!
//! ## Validation
//!
//! Rules that apply to files may not use a pattern other than `**` or any
//! exceptions, and default ACL entries may only be applied to directories.
//! Any violation rejects the whole section.

pub mod acl;
pub mod entry;
pub mod error;
pub mod glob;
pub mod list;
pub mod options;
pub mod rule;
pub mod spec;

// Re-export main types for convenience
pub use acl::{AclEntries, AclSet};
pub use entry::EntryKind;
pub use error::{ListError, ValidationError, ValidationResult};
pub use glob::{matches_simple_glob, Glob};
pub use list::PermissionList;
pub use options::{RuleOptions, SelinuxContext, MATCH_ALL};
pub use rule::{expand_path, PermissionRule};
pub use spec::PermissionSpec;
