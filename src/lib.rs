//! objedit-schema - schema definition and validation engine for
//! schema-driven object editors
//!
//! An object editor renders a JSON-like value as an editable table, driven
//! by a declarative schema describing the value's permissible shape. This
//! crate is the engine underneath: the schema vocabulary, the combinators
//! for building schema trees, and the structural matcher that decides
//! whether a candidate value conforms. Rendering, application state, and
//! event handling belong to the host and are not part of this crate.
//!
//! Everything here is pure and synchronous: schema trees are immutable
//! once built, candidates are only read, and repeated validation of the
//! same inputs is deterministic.
//!
//! ```
//! use objedit_schema::{matches_schema, SchemaNode, SchemaType, Shape, Value};
//!
//! let schema: SchemaNode = Shape::new()
//!     .field("name", SchemaType::string().required())
//!     .field(
//!         "jobs",
//!         SchemaType::array_of(
//!             Shape::new()
//!                 .field("year", SchemaType::number())
//!                 .field("title", SchemaType::string()),
//!         ),
//!     )
//!     .into();
//!
//! let candidate = Value::Object(vec![
//!     ("name".into(), Value::from("Jane")),
//!     (
//!         "jobs".into(),
//!         Value::Array(vec![Value::Object(vec![
//!             ("year".into(), Value::from(2006.0)),
//!             ("title".into(), Value::from("Engineer")),
//!         ])]),
//!     ),
//! ]);
//!
//! assert_eq!(matches_schema(&schema, &candidate), Ok(true));
//! ```

pub mod errors;
pub mod matcher;
pub mod parser;
pub mod types;
pub mod value;

pub use errors::{SchemaError, SchemaResult};
pub use matcher::{matches_schema, matches_schema_opt, validate_schema};
pub use parser::parse_schema;
pub use types::{SchemaKind, SchemaNode, SchemaType, Shape, TypeOptions};
pub use value::Value;
