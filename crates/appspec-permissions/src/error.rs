//! Error types for permission rule validation
//!
//! Every variant describes a malformed permissions section. The deployment
//! is expected to stop and show the message to the user as-is.

use thiserror::Error;

/// Validation error types.
///
/// Raised when a permission rule can not be built or its shape is
/// inconsistent with the kind of filesystem entry it targets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The rule has no object path.
    #[error(
        "The deployment failed because a permission listed in the application specification file has no object value. \
         Update the permissions section of the AppSpec file, and then try again."
    )]
    MissingObject,

    /// A rule that applies to files carries a pattern other than `**`.
    #[error(
        "The deployment failed because the application specification file includes an object ({object}) with an invalid pattern ({pattern}), \
         such as a pattern for a file applied to a directory. Correct the permissions section of the AppSpec file, and then try again."
    )]
    InvalidFilePattern {
        /// Object path of the offending rule.
        object: String,
        /// The pattern that was supplied.
        pattern: String,
    },

    /// A rule that applies to files carries exceptions.
    #[error(
        "The deployment failed because the except parameter for a pattern in the permissions section ({except:?}) for the object named {object} \
         contains an invalid format. Update the AppSpec file, and then try again."
    )]
    InvalidFileExcept {
        /// Object path of the offending rule.
        object: String,
        /// The exceptions that were supplied.
        except: Vec<String>,
    },

    /// A default ACL entry was given for a plain file target.
    #[error(
        "The deployment failed because the -d parameter has been specified to apply an acl setting to a file ({object}). \
         This parameter is supported for directories only. Update the AppSpec file, and then try again."
    )]
    DefaultAclOnFile {
        /// Label of the file the rule was applied to.
        object: String,
    },

    /// An exception pattern spans more than one path segment.
    #[error(
        "The deployment failed because the except parameter ({pattern}) for the object named {object} contains a path separator. \
         Exception patterns apply to a single path segment. Update the AppSpec file, and then try again."
    )]
    InvalidExceptPattern {
        /// Object path of the offending rule.
        object: String,
        /// The exception pattern that was supplied.
        pattern: String,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors from loading a whole permissions section.
#[derive(Debug, Error)]
pub enum ListError {
    /// The document is not a valid permissions section.
    #[error("failed to parse permissions JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rule could not be built or failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ValidationError {
    /// Get a stable error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingObject => "MISSING_OBJECT",
            ValidationError::InvalidFilePattern { .. } => "INVALID_FILE_PATTERN",
            ValidationError::InvalidFileExcept { .. } => "INVALID_FILE_EXCEPT",
            ValidationError::DefaultAclOnFile { .. } => "DEFAULT_ACL_ON_FILE",
            ValidationError::InvalidExceptPattern { .. } => "INVALID_EXCEPT_PATTERN",
        }
    }

    /// Object path (or target label) the error refers to, if any.
    pub fn object(&self) -> Option<&str> {
        match self {
            ValidationError::MissingObject => None,
            ValidationError::InvalidFilePattern { object, .. }
            | ValidationError::InvalidFileExcept { object, .. }
            | ValidationError::DefaultAclOnFile { object }
            | ValidationError::InvalidExceptPattern { object, .. } => Some(object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_object() {
        let err = ValidationError::InvalidFilePattern {
            object: "/app/config".to_string(),
            pattern: "*.conf".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("(/app/config)"));
        assert!(message.contains("(*.conf)"));

        let err = ValidationError::InvalidFileExcept {
            object: "/app/config".to_string(),
            except: vec!["a".to_string(), "b".to_string()],
        };
        assert!(err.to_string().contains(r#"(["a", "b"])"#));
        assert!(err.to_string().contains("object named /app/config"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::MissingObject.error_code(), "MISSING_OBJECT");
        assert_eq!(
            ValidationError::DefaultAclOnFile {
                object: "/x".to_string()
            }
            .error_code(),
            "DEFAULT_ACL_ON_FILE"
        );
    }

    #[test]
    fn test_list_error_is_transparent() {
        let err = ListError::from(ValidationError::MissingObject);
        assert_eq!(err.to_string(), ValidationError::MissingObject.to_string());
    }

    #[test]
    fn test_object_accessor() {
        assert_eq!(ValidationError::MissingObject.object(), None);
        let err = ValidationError::InvalidExceptPattern {
            object: "/app".to_string(),
            pattern: "a/b".to_string(),
        };
        assert_eq!(err.object(), Some("/app"));
    }
}
