//! Binding error taxonomy
//!
//! Exactly two failure kinds exist, and both carry enough context to
//! pinpoint the offending field:
//! - [`BindError::FieldAbsent`]: a required field is missing, or a typed
//!   getter was called on an undefined node
//! - [`BindError::FieldTypeMismatch`]: a field is present but its JSON
//!   kind differs from the declared kind
//!
//! Both are terminal for the binding call that raised them. There is no
//! internal recovery or retry.

use thiserror::Error;

use crate::kind::Kind;

/// A failure raised during the binding pass or by a typed getter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The field is required but missing from its container.
    #[error("element in \"{container}\" called \"{field}\" does not exist")]
    FieldAbsent {
        /// Name of the container the field was looked up in.
        container: String,
        /// Name of the missing field.
        field: String,
    },

    /// The field is present but its value kind does not match the schema.
    #[error(
        "element in \"{container}\" called \"{field}\" has an invalid type \
         (expected {expected}, got {actual})"
    )]
    FieldTypeMismatch {
        /// Name of the container the field was looked up in.
        container: String,
        /// Name of the mis-typed field.
        field: String,
        /// Kind the schema declared.
        expected: Kind,
        /// Kind found in the document.
        actual: Kind,
    },
}

impl BindError {
    /// Creates a missing-field error.
    pub fn absent(container: impl Into<String>, field: impl Into<String>) -> Self {
        BindError::FieldAbsent {
            container: container.into(),
            field: field.into(),
        }
    }

    /// Creates a type-mismatch error.
    pub fn mismatch(
        container: impl Into<String>,
        field: impl Into<String>,
        expected: Kind,
        actual: Kind,
    ) -> Self {
        BindError::FieldTypeMismatch {
            container: container.into(),
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Returns the name of the container the failure occurred in.
    pub fn container(&self) -> &str {
        match self {
            BindError::FieldAbsent { container, .. } => container,
            BindError::FieldTypeMismatch { container, .. } => container,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            BindError::FieldAbsent { field, .. } => field,
            BindError::FieldTypeMismatch { field, .. } => field,
        }
    }
}

/// Result type for binding operations.
pub type BindResult<T> = Result<T, BindError>;
