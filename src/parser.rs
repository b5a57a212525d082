//! Schema document parser
//!
//! Schemas can be declared as plain JSON documents and handed to the host
//! application alongside the value being edited. The parser is the single
//! pass that decides, for every node, whether it is a leaf descriptor or a
//! nested shape; after it runs, the typed [`SchemaNode`] tree never needs
//! to be re-sniffed.
//!
//! Document format:
//!
//! ```json
//! {
//!     "name": { "type": "string", "required": true },
//!     "jobs": {
//!         "type": "arrayOf",
//!         "element": {
//!             "year": { "type": "number" },
//!             "title": { "type": "string" }
//!         }
//!     },
//!     "address": {
//!         "city": { "type": "string" }
//!     }
//! }
//! ```
//!
//! A mapping whose `"type"` key holds a string is a leaf descriptor; any
//! other non-empty mapping is a shape. Unrecognized descriptor keys are
//! ignored. Everything else -- bare strings, numbers, `null`, empty
//! mappings -- is malformed and reported with the path to the offending
//! node.

use serde_json::Value as Json;
use tracing::trace;

use crate::errors::{SchemaError, SchemaResult};
use crate::types::{SchemaKind, SchemaNode, SchemaType, Shape, TypeOptions};

/// Parses a JSON schema document into a typed schema tree.
///
/// # Errors
///
/// Returns [`SchemaError::Definition`] with the dot-joined path and the
/// observed runtime type whenever a node is neither a leaf descriptor nor
/// a non-empty mapping of field documents.
pub fn parse_schema(document: &Json) -> SchemaResult<SchemaNode> {
    let schema = parse_node(document, "")?;
    trace!("parsed schema document");
    Ok(schema)
}

fn parse_node(document: &Json, path: &str) -> SchemaResult<SchemaNode> {
    let Some(map) = document.as_object() else {
        return Err(SchemaError::definition(
            display_path(path),
            describe(document),
        ));
    };

    if map.is_empty() {
        return Err(SchemaError::definition(display_path(path), "an empty mapping"));
    }

    if let Some(kind_name) = map.get("type").and_then(Json::as_str) {
        return parse_leaf(map, kind_name, path);
    }

    // A shape: every field is itself a schema document
    let mut shape = Shape::new();
    for (key, child) in map {
        shape = shape.field(key.clone(), parse_node(child, &child_path(path, key))?);
    }
    Ok(shape.into())
}

fn parse_leaf(
    map: &serde_json::Map<String, Json>,
    kind_name: &str,
    path: &str,
) -> SchemaResult<SchemaNode> {
    let kind: SchemaKind = kind_name.parse().map_err(|()| {
        SchemaError::definition(
            display_path(path),
            format!("an unknown type '{}'", kind_name),
        )
    })?;

    // Permissive options: only `required` is recognized, and only as a
    // boolean; everything else in the descriptor is ignored.
    let required = map.get("required").and_then(Json::as_bool).unwrap_or(false);

    let leaf = match kind {
        SchemaKind::ArrayOf => {
            let element = map.get("element").ok_or_else(|| {
                SchemaError::definition(
                    display_path(path),
                    "an arrayOf descriptor without an element schema",
                )
            })?;
            SchemaType::array_of(parse_node(element, &element_path(path))?)
        }
        _ => SchemaType::with_options(kind, TypeOptions::default()),
    };

    let leaf = if required { leaf.required() } else { leaf };
    Ok(leaf.into())
}

/// Describes a JSON node's runtime type for error messages
fn describe(document: &Json) -> &'static str {
    match document {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "a mapping",
    }
}

fn child_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn element_path(prefix: &str) -> String {
    format!("{}[]", prefix)
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "$root"
    } else {
        path
    }
}
