//! Schema validator
//!
//! Two concerns live here:
//!
//! - [`validate_schema`]: confirm that a schema tree is well-formed. The
//!   typed tree rules out most malformations at construction time; what
//!   remains is empty shapes and `arrayOf` leaves built without an
//!   element schema, both reported with a dot-joined path.
//! - [`matches_schema`]: decide whether a candidate value conforms to a
//!   well-formed schema. Non-conformance is a boolean `false`, never an
//!   error; only a malformed schema raises one.
//!
//! Matching is pure, synchronous, and deterministic. Schema trees are
//! never mutated, so concurrent matches need no coordination.
//!
//! Semantics:
//! - An absent value matches any non-required leaf trivially; for a
//!   required leaf, absence is always a mismatch.
//! - A shape matches iff every declared field matches the candidate's
//!   value at that key; when the candidate is absent or not an object,
//!   each field sees an absent value. Undeclared candidate fields are
//!   never inspected: shapes are whitelists, not closed worlds.
//! - `number` uses type-tag semantics: NaN is a valid number.
//! - `date` rejects values whose timestamp failed to parse.
//! - `arrayOf` rejects non-sequences outright and otherwise requires
//!   every element to match the embedded element schema independently.

use tracing::{debug, trace};

use crate::errors::{SchemaError, SchemaResult};
use crate::types::{SchemaKind, SchemaNode, SchemaType};
use crate::value::Value;

/// Validates that `schema` is a well-formed schema tree.
///
/// # Errors
///
/// Returns [`SchemaError::Definition`] naming the offending path when a
/// shape declares no fields or an `arrayOf` leaf has no element schema.
pub fn validate_schema(schema: &SchemaNode) -> SchemaResult<()> {
    validate_node(schema, "")
}

/// Decides whether `candidate` conforms to `schema`.
///
/// The schema is checked for well-formedness first; a malformed schema is
/// reported as the generic [`SchemaError::InvalidSchema`], with the
/// precise path discarded. Call [`validate_schema`] directly to keep it.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidSchema`] when `schema` is malformed.
/// Value mismatches are `Ok(false)`, never errors.
pub fn matches_schema(schema: &SchemaNode, candidate: &Value) -> SchemaResult<bool> {
    matches_schema_opt(schema, Some(candidate))
}

/// Like [`matches_schema`], but the candidate itself may be absent.
pub fn matches_schema_opt(schema: &SchemaNode, candidate: Option<&Value>) -> SchemaResult<bool> {
    if let Err(err) = validate_schema(schema) {
        debug!(%err, "match rejected: malformed schema");
        return Err(SchemaError::InvalidSchema);
    }

    let matched = schema.matches_opt(candidate);
    trace!(matched, "schema match finished");
    Ok(matched)
}

fn validate_node(node: &SchemaNode, path: &str) -> SchemaResult<()> {
    match node {
        SchemaNode::Leaf(leaf) => match (leaf.kind(), leaf.element_type()) {
            (SchemaKind::ArrayOf, Some(element)) => {
                validate_node(element, &element_path(path))
            }
            (SchemaKind::ArrayOf, None) => Err(SchemaError::definition(
                display_path(path),
                "an arrayOf type without an element schema",
            )),
            _ => Ok(()),
        },
        SchemaNode::Shape(shape) => {
            if shape.is_empty() {
                return Err(SchemaError::definition(display_path(path), "an empty shape"));
            }

            for (key, child) in shape.iter() {
                validate_node(child, &child_path(path, key))?;
            }
            Ok(())
        }
    }
}

impl SchemaNode {
    /// Structural match of a present candidate against this node
    pub fn matches(&self, candidate: &Value) -> bool {
        self.matches_opt(Some(candidate))
    }

    /// Structural match where the candidate may be absent.
    ///
    /// Assumes the node is well-formed; run [`validate_schema`] first for
    /// trees of unknown provenance.
    pub fn matches_opt(&self, candidate: Option<&Value>) -> bool {
        match self {
            SchemaNode::Leaf(leaf) => leaf.accepts(candidate),
            SchemaNode::Shape(shape) => shape.iter().all(|(key, child)| {
                child.matches_opt(candidate.and_then(|value| value.get(key)))
            }),
        }
    }
}

impl SchemaType {
    /// The leaf predicate: does `candidate` satisfy this type?
    ///
    /// Absence is tolerated exactly when the type is not required.
    pub fn accepts(&self, candidate: Option<&Value>) -> bool {
        let Some(value) = candidate else {
            return !self.is_required();
        };

        match self.kind() {
            SchemaKind::Any => true,
            SchemaKind::String => matches!(value, Value::String(_)),
            SchemaKind::Boolean => matches!(value, Value::Bool(_)),
            SchemaKind::Function => matches!(value, Value::Function(_)),
            // Type-tag semantics: NaN passes
            SchemaKind::Number => matches!(value, Value::Number(_)),
            SchemaKind::Date => matches!(value, Value::Date(Some(_))),
            SchemaKind::Array => matches!(value, Value::Array(_)),
            SchemaKind::Object => matches!(value, Value::Object(_)),
            SchemaKind::ArrayOf => match (self.element_type(), value) {
                // No partial credit: non-sequences fail outright
                (Some(element), Value::Array(items)) => {
                    items.iter().all(|item| element.matches(item))
                }
                _ => false,
            },
        }
    }
}

/// Appends a field name to a dot-joined path
fn child_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Path of an `arrayOf` element schema
fn element_path(prefix: &str) -> String {
    format!("{}[]", prefix)
}

/// Root nodes have an empty internal path; show them as `$root`
fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "$root"
    } else {
        path
    }
}
