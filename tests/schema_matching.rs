//! Schema Matching Tests
//!
//! Structural-match semantics:
//! - Absence matches any non-required type; required types reject absence
//! - Type checks use type-tag semantics (NaN is a number)
//! - Dates must be parseable
//! - Shapes are whitelists: undeclared fields never cause mismatch
//! - arrayOf checks every element and rejects non-sequences outright
//! - Mismatches are boolean results, never errors

use objedit_schema::{
    matches_schema, matches_schema_opt, SchemaError, SchemaNode, SchemaType, Shape, Value,
};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn person_schema() -> SchemaNode {
    Shape::new()
        .field("foo", SchemaType::string().required())
        .field("bar", SchemaType::number())
        .field(
            "baz",
            Shape::new()
                .field("biz", SchemaType::number())
                .field("boz", SchemaType::number())
                .field(
                    "booz",
                    Shape::new().field(
                        "barz",
                        Shape::new().field("nested", SchemaType::number()),
                    ),
                ),
        )
        .into()
}

fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

// =============================================================================
// Required / Optional Semantics
// =============================================================================

/// Every kind with required=false matches an absent value trivially.
#[test]
fn test_optional_kinds_match_absence() {
    let kinds: Vec<SchemaNode> = vec![
        SchemaType::any().into(),
        SchemaType::string().into(),
        SchemaType::boolean().into(),
        SchemaType::function().into(),
        SchemaType::number().into(),
        SchemaType::date().into(),
        SchemaType::array().into(),
        SchemaType::object().into(),
        SchemaType::array_of(SchemaType::string()).into(),
    ];

    for schema in &kinds {
        assert_eq!(matches_schema_opt(schema, None), Ok(true));
    }
}

/// Every kind with required=true rejects an absent value.
#[test]
fn test_required_kinds_reject_absence() {
    let kinds: Vec<SchemaNode> = vec![
        SchemaType::any().required().into(),
        SchemaType::string().required().into(),
        SchemaType::boolean().required().into(),
        SchemaType::function().required().into(),
        SchemaType::number().required().into(),
        SchemaType::date().required().into(),
        SchemaType::array().required().into(),
        SchemaType::object().required().into(),
        SchemaType::array_of(SchemaType::string()).required().into(),
    ];

    for schema in &kinds {
        assert_eq!(matches_schema_opt(schema, None), Ok(false));
    }
}

// =============================================================================
// Leaf Predicates
// =============================================================================

/// Valid dates pass, unparseable dates fail.
#[test]
fn test_date_validity() {
    let schema: SchemaNode = SchemaType::date().into();

    let valid = Value::parse_date("2006-01-02T15:04:05Z");
    assert_eq!(matches_schema(&schema, &valid), Ok(true));

    let invalid = Value::parse_date("bad date right here");
    assert_eq!(matches_schema(&schema, &invalid), Ok(false));
}

/// NaN is a valid number: the number kind checks the type tag, not
/// numeric well-formedness.
#[test]
fn test_nan_matches_number() {
    let schema: SchemaNode = SchemaType::number().into();
    assert_eq!(matches_schema(&schema, &Value::from(f64::NAN)), Ok(true));
}

/// Null is a present value; it satisfies only the any kind.
#[test]
fn test_null_satisfies_only_any() {
    assert_eq!(
        matches_schema(&SchemaType::any().into(), &Value::Null),
        Ok(true)
    );
    assert_eq!(
        matches_schema(&SchemaType::string().into(), &Value::Null),
        Ok(false)
    );
    assert_eq!(
        matches_schema(&SchemaType::object().into(), &Value::Null),
        Ok(false)
    );
}

/// Function references satisfy the function kind and nothing typed else.
#[test]
fn test_function_references() {
    let schema: SchemaNode = SchemaType::function().into();
    assert_eq!(matches_schema(&schema, &Value::function("onSave")), Ok(true));
    assert_eq!(matches_schema(&schema, &Value::from("onSave")), Ok(false));
}

// =============================================================================
// Shape Semantics
// =============================================================================

/// Optional fields may be absent; required fields may not.
#[test]
fn test_nested_shape_required_interplay() {
    let schema: SchemaNode = Shape::new()
        .field("foo", SchemaType::string().required())
        .field("bar", SchemaType::number())
        .into();

    assert_eq!(matches_schema(&schema, &value(json!({ "foo": "x" }))), Ok(true));
    assert_eq!(matches_schema(&schema, &value(json!({ "bar": 1 }))), Ok(false));
}

/// Unknown candidate keys never cause failure.
#[test]
fn test_shape_is_a_whitelist() {
    let schema: SchemaNode = Shape::new().field("foo", SchemaType::string()).into();

    let candidate = value(json!({ "foo": "a", "extra": 123, "more": [1, 2] }));
    assert_eq!(matches_schema(&schema, &candidate), Ok(true));
}

/// Deeply nested candidates are matched in lock-step with the schema.
#[test]
fn test_deep_shape_match() {
    let schema = person_schema();

    let full = value(json!({
        "foo": "string",
        "bar": 1,
        "baz": {
            "biz": 1,
            "boz": 1,
            "booz": { "barz": { "nested": 1 } }
        }
    }));
    assert_eq!(matches_schema(&schema, &full), Ok(true));

    // All nested fields are optional
    let sparse = value(json!({ "foo": "string" }));
    assert_eq!(matches_schema(&schema, &sparse), Ok(true));
}

/// Wrong types anywhere in the tree fail the whole match.
#[test]
fn test_deep_shape_mismatches() {
    let schema = person_schema();

    let failing = [
        value(json!({ "foo": "string", "bar": "string" })),
        value(json!({ "foo": 1 })),
        value(json!({ "foo": null })),
        value(json!({})),
        value(json!(1)),
    ];

    for candidate in &failing {
        assert_eq!(matches_schema(&schema, candidate), Ok(false));
    }

    assert_eq!(matches_schema_opt(&schema, None), Ok(false));
}

// =============================================================================
// arrayOf Semantics
// =============================================================================

/// arrayOf matches exactly when every element matches the element schema.
#[test]
fn test_array_of_every_element_law() {
    let element: SchemaNode = Shape::new()
        .field("foo", SchemaType::string().required())
        .into();
    let schema: SchemaNode = SchemaType::array_of(element.clone()).into();

    let items = [
        value(json!({ "foo": "string", "extra": 1 })),
        value(json!({ "foo": "other" })),
        value(json!({ "foo": 1 })),
        value(json!({})),
        value(json!(1)),
    ];

    for take in 0..=items.len() {
        let prefix: Vec<Value> = items[..take].to_vec();
        let expected = prefix
            .iter()
            .all(|item| matches_schema(&element, item) == Ok(true));

        let candidate = Value::Array(prefix);
        assert_eq!(matches_schema(&schema, &candidate), Ok(expected));
    }
}

/// Non-sequences fail arrayOf outright, with no partial credit.
#[test]
fn test_array_of_rejects_non_sequences() {
    let schema: SchemaNode = SchemaType::array_of(SchemaType::number()).into();

    let non_sequences = [
        value(json!(0)),
        value(json!("not an array")),
        value(json!({ "0": 1 })),
        Value::Null,
    ];

    for candidate in &non_sequences {
        assert_eq!(matches_schema(&schema, candidate), Ok(false));
    }
}

// =============================================================================
// Determinism
// =============================================================================

/// Repeated validation of the same schema and candidate is deterministic
/// and side-effect-free.
#[test]
fn test_matching_is_deterministic() {
    let schema = person_schema();
    let good = value(json!({ "foo": "string", "bar": 2 }));
    let bad = value(json!({ "bar": 2 }));

    for _ in 0..100 {
        assert_eq!(matches_schema(&schema, &good), Ok(true));
        assert_eq!(matches_schema(&schema, &bad), Ok(false));
    }
}

// =============================================================================
// Malformed Schemas at the Match Boundary
// =============================================================================

/// The matcher reports malformed schemas with the generic fault, not the
/// path-bearing definition fault.
#[test]
fn test_malformed_schema_is_generic_at_match_time() {
    let schema: SchemaNode = Shape::new()
        .field("baz", Shape::new().field("booz", Shape::new()))
        .into();

    let result = matches_schema(&schema, &value(json!({})));
    assert_eq!(result, Err(SchemaError::InvalidSchema));
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

/// A résumé-style schema matched against conforming and non-conforming
/// candidates.
#[test]
fn test_end_to_end_scenario() {
    let schema: SchemaNode = Shape::new()
        .field("name", SchemaType::string().required())
        .field(
            "jobs",
            SchemaType::array_of(
                Shape::new()
                    .field("year", SchemaType::number())
                    .field("title", SchemaType::string()),
            ),
        )
        .into();

    let jane = value(json!({
        "name": "Jane",
        "jobs": [{ "year": 2006, "title": "Engineer" }]
    }));
    assert_eq!(matches_schema(&schema, &jane), Ok(true));

    // Name missing and required; year has the wrong type
    let anonymous = value(json!({
        "jobs": [{ "year": "not a number" }]
    }));
    assert_eq!(matches_schema(&schema, &anonymous), Ok(false));
}
