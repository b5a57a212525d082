//! Schema type definitions
//!
//! A schema is a tree: leaves are [`SchemaType`] values (an atomic,
//! immutable validation unit for a single field) and interior nodes are
//! [`Shape`] values (an insertion-ordered mapping from field name to child
//! node, validated as a structural whitelist).
//!
//! Supported leaf kinds:
//! - any: any present value, including null
//! - string, boolean, number, date, function: single typed values
//! - array: any sequence, regardless of element types
//! - object: any plain mapping, regardless of its fields
//! - arrayOf: a sequence whose every element matches an embedded
//!   element schema (leaf or shape)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The vocabulary of schema leaf kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    /// Any present value
    Any,
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Named reference to a host-registered callback
    Function,
    /// 64-bit floating point; NaN is a valid number under this kind
    Number,
    /// Calendar timestamp; unparseable dates are rejected
    Date,
    /// Any sequence
    Array,
    /// Any plain mapping
    Object,
    /// Sequence with a typed element schema
    ArrayOf,
}

impl SchemaKind {
    /// Returns the kind name used in schema documents and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Any => "any",
            SchemaKind::String => "string",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Function => "function",
            SchemaKind::Number => "number",
            SchemaKind::Date => "date",
            SchemaKind::Array => "array",
            SchemaKind::Object => "object",
            SchemaKind::ArrayOf => "arrayOf",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(SchemaKind::Any),
            "string" => Ok(SchemaKind::String),
            "boolean" => Ok(SchemaKind::Boolean),
            "function" => Ok(SchemaKind::Function),
            "number" => Ok(SchemaKind::Number),
            "date" => Ok(SchemaKind::Date),
            "array" => Ok(SchemaKind::Array),
            "object" => Ok(SchemaKind::Object),
            "arrayOf" => Ok(SchemaKind::ArrayOf),
            _ => Err(()),
        }
    }
}

/// Options recognized by every schema type factory.
///
/// Unknown concerns are not representable here; schema documents carrying
/// unrecognized option keys are accepted permissively by the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOptions {
    /// Whether absence of a value is a mismatch. Defaults to false: an
    /// absent value matches any non-required type trivially.
    #[serde(default)]
    pub required: bool,
}

/// The atomic validation unit: a tagged leaf type plus its options.
///
/// Immutable once constructed; `kind` and `required` never change. The
/// validation behavior itself lives in [`crate::matcher`], keeping data
/// separate from the recursive match logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaType {
    kind: SchemaKind,
    required: bool,
    /// Present only for `arrayOf`: the schema every element must match
    element_type: Option<Box<SchemaNode>>,
}

impl SchemaType {
    /// Generic factory: construct a schema type of the given kind.
    ///
    /// `arrayOf` types built this way carry no element schema and are
    /// rejected by [`crate::matcher::validate_schema`]; use
    /// [`SchemaType::array_of`] instead.
    pub fn with_options(kind: SchemaKind, options: TypeOptions) -> Self {
        Self {
            kind,
            required: options.required,
            element_type: None,
        }
    }

    /// An optional `any` type: matches every present value
    pub fn any() -> Self {
        Self::with_options(SchemaKind::Any, TypeOptions::default())
    }

    /// An optional string type
    pub fn string() -> Self {
        Self::with_options(SchemaKind::String, TypeOptions::default())
    }

    /// An optional boolean type
    pub fn boolean() -> Self {
        Self::with_options(SchemaKind::Boolean, TypeOptions::default())
    }

    /// An optional function-reference type
    pub fn function() -> Self {
        Self::with_options(SchemaKind::Function, TypeOptions::default())
    }

    /// An optional number type
    pub fn number() -> Self {
        Self::with_options(SchemaKind::Number, TypeOptions::default())
    }

    /// An optional date type
    pub fn date() -> Self {
        Self::with_options(SchemaKind::Date, TypeOptions::default())
    }

    /// An optional untyped-array type
    pub fn array() -> Self {
        Self::with_options(SchemaKind::Array, TypeOptions::default())
    }

    /// An optional untyped-object type
    pub fn object() -> Self {
        Self::with_options(SchemaKind::Object, TypeOptions::default())
    }

    /// The `arrayOf` combinator: a sequence type whose every element must
    /// match `element` (itself a leaf or a nested shape).
    pub fn array_of(element: impl Into<SchemaNode>) -> Self {
        Self {
            kind: SchemaKind::ArrayOf,
            required: false,
            element_type: Some(Box::new(element.into())),
        }
    }

    /// Consume this type and mark it required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The kind tag, exposed for rendering-layer introspection
    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    /// Whether absence of a value is a mismatch
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The element schema of an `arrayOf` type, `None` for every other kind
    pub fn element_type(&self) -> Option<&SchemaNode> {
        self.element_type.as_deref()
    }
}

/// An insertion-ordered mapping from field name to child schema node.
///
/// Shapes are structural whitelists: the matcher checks every declared
/// field and never inspects undeclared ones. Field names may be any
/// string, including the empty string. Key iteration preserves insertion
/// order so rendering code can present fields the way they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    fields: Vec<(String, SchemaNode)>,
}

impl Shape {
    /// Create an empty shape. An empty shape is NOT a valid schema node;
    /// at least one field must be added before validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this shape and add (or replace) a field.
    ///
    /// Replacing an existing field keeps its original position.
    pub fn field(mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        let name = name.into();
        let node = node.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = node,
            None => self.fields.push((name, node)),
        }
        self
    }

    /// Look up a field's schema node by name
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the shape declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, SchemaNode)> for Shape {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Shape::new(), |shape, (name, node)| shape.field(name, node))
    }
}

/// A node in a schema tree: either an atomic leaf type or a nested shape.
///
/// The distinction is decided once, at construction time, rather than
/// re-sniffed on every validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// An atomic validation unit
    Leaf(SchemaType),
    /// A nested field mapping
    Shape(Shape),
}

impl SchemaNode {
    /// The leaf type, if this node is a leaf
    pub fn as_leaf(&self) -> Option<&SchemaType> {
        match self {
            SchemaNode::Leaf(leaf) => Some(leaf),
            SchemaNode::Shape(_) => None,
        }
    }

    /// The shape, if this node is a shape
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            SchemaNode::Leaf(_) => None,
            SchemaNode::Shape(shape) => Some(shape),
        }
    }
}

impl From<SchemaType> for SchemaNode {
    fn from(leaf: SchemaType) -> Self {
        SchemaNode::Leaf(leaf)
    }
}

impl From<Shape> for SchemaNode {
    fn from(shape: Shape) -> Self {
        SchemaNode::Shape(shape)
    }
}
