//! # Schema Errors
//!
//! Error types for the schema engine.
//!
//! Two fault kinds exist:
//! - Definition faults: the schema tree itself is malformed. Raised as
//!   [`SchemaError::Definition`] with the dot-joined path to the offending
//!   node and its observed runtime type.
//! - Match faults: a value does not conform to a well-formed schema. These
//!   are reported as a boolean `false` by the matcher, never as an error.
//!
//! [`SchemaError::InvalidSchema`] is the generic fault the matcher
//! substitutes when it is handed a malformed schema: the precise path is
//! deliberately discarded at that boundary. Callers that need the path
//! must run [`crate::matcher::validate_schema`] themselves first.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while defining or checking schemas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A node in the schema tree is neither a schema type nor a non-empty
    /// shape. `path` is dot-joined from the root (`$root` for the root node
    /// itself); `found` describes what was actually there.
    #[error("invalid schema node at '{path}': expected a schema type or a non-empty shape, found {found}")]
    Definition {
        /// Dot-joined path to the offending node
        path: String,
        /// Observed runtime type of the offending node
        found: String,
    },

    /// Generic fault for a malformed schema handed to the matcher.
    #[error("expected a valid schema")]
    InvalidSchema,
}

impl SchemaError {
    /// Create a definition fault for the node at `path`
    pub fn definition(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Definition {
            path: path.into(),
            found: found.into(),
        }
    }

    /// Returns the offending path for definition faults
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Definition { path, .. } => Some(path),
            Self::InvalidSchema => None,
        }
    }
}
