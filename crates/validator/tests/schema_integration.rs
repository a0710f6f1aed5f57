//! End-to-end checks of the engine through the public API.

use beacon_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

// ============================================================================
// PERSON SCHEMA
// ============================================================================

#[fixture]
fn person() -> Schema {
    Schema::builder()
        .field("name")
        .required()
        .non_empty_string()
        .done()
        .field("age")
        .optional()
        .is_integer()
        .min_integer(0)
        .done()
        .build()
        .expect("valid schema")
}

#[rstest]
#[case(json!({"name": "", "age": 5}), Outcome::fail_at("Empty string", "name"))]
#[case(json!({"age": 5}), Outcome::fail("Missing required field 'name'"))]
#[case(json!({"name": "ok"}), Outcome::ok())]
#[case(json!({"name": "ok", "age": -1}), Outcome::fail_at("Integer < 0", "age"))]
#[case(json!({"name": "ok", "age": "5"}), Outcome::fail_at("Not an integer", "age"))]
#[case(json!({"name": 7}), Outcome::fail_at("Not a string", "name"))]
#[case(json!(["name"]), Outcome::fail("Root is not an object"))]
fn person_schema(person: Schema, #[case] input: Value, #[case] expected: Outcome) {
    assert_eq!(person.validate(&input), expected);
}

#[rstest]
fn success_outcome_serializes_empty(person: Schema) {
    let json = serde_json::to_value(person.validate(&json!({"name": "x"}))).unwrap();
    assert_eq!(json, json!({"success": true, "message": "", "path": ""}));
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn array_bounds_and_element_paths() {
    let v: Validator = array_of(is_integer()).min_size(1).max_size(3).into();
    assert_eq!(v.validate(&json!([])), Outcome::fail("Array size < 1"));
    assert_eq!(v.validate(&json!([1, 2])), Outcome::ok());
    assert_eq!(v.validate(&json!(["x"])).path(), "[0]");
}

#[test]
fn object_with_array_member() {
    let v = object([("tags", Validator::from(array_of(is_integer())))], Vec::<String>::new());
    let outcome = v.validate(&json!({"tags": [1, "x"]}));
    assert!(outcome.is_err());
    assert_eq!(outcome.path(), "tags[1]");
}

#[rstest]
#[case(json!("ab"), "String length < 3")]
#[case(json!([1, 2]), "Array size < 3")]
#[case(json!(5), "Value has no length")]
fn min_length_is_polymorphic(#[case] value: Value, #[case] message: &str) {
    assert_eq!(min_length(3).validate(&value), Outcome::fail(message));
}

#[test]
fn regex_is_full_match() {
    let v = matches_regex("^[a-z]+$");
    assert!(v.validate(&json!("abc")).is_ok());
    assert!(v.validate(&json!("abc1")).is_err());
}

#[test]
fn or_aggregates_both_messages() {
    let outcome = any_of([min_length(5), is_integer()]).validate(&json!("abc"));
    assert_eq!(
        outcome,
        Outcome::fail("None matched. Errors: String length < 5; Not an integer")
    );
}

// ============================================================================
// DEEP NESTING
// ============================================================================

#[test]
fn deep_paths_are_assembled_innermost_first() {
    let address = ObjectValidator::new()
        .member("city", non_empty_string())
        .member("lines", array_of(max_length(10)).max_size(3))
        .require("city");

    let schema = Schema::builder()
        .field("user")
        .nested_object(
            [
                ("address", Validator::from(address)),
                ("emails", Validator::from(array_of(matches_regex("[^@]+@[^@]+")))),
            ],
            ["address"],
        )
        .done()
        .build()
        .unwrap();

    let cases = [
        (
            json!({"user": {"address": {"city": ""}}}),
            Outcome::fail_at("Empty string", "user.address.city"),
        ),
        (
            json!({"user": {"address": {"city": "x", "lines": ["ok", "far too long"]}}}),
            Outcome::fail_at("String length > 10", "user.address.lines[1]"),
        ),
        (
            json!({"user": {"address": {"city": "x"}, "emails": ["a@b", "nope"]}}),
            Outcome::fail_at("Does not match regex: [^@]+@[^@]+", "user.emails[1]"),
        ),
        (
            json!({"user": {}}),
            Outcome::fail_at("Required field 'address' not found", "user"),
        ),
        (json!({"user": {"address": {"city": "x"}}}), Outcome::ok()),
    ];

    for (input, expected) in cases {
        assert_eq!(schema.validate(&input), expected, "input: {input}");
    }
}

#[test]
fn invalid_regex_in_schema_fails_as_data() {
    let schema = Schema::builder()
        .field("code")
        .matches_regex("[a-")
        .done()
        .build()
        .expect("regex is not compiled at build time");

    let outcome = schema.validate(&json!({"code": "a"}));
    assert_eq!(outcome.path(), "code");
    assert!(outcome.message().starts_with("Invalid regex: "));
}

#[test]
fn violation_converts_for_question_mark() {
    fn accept(schema: &Schema, value: &Value) -> Result<(), Violation> {
        schema.check(value)?;
        Ok(())
    }

    let schema = Schema::builder().field("id").is_integer().done().build().unwrap();
    assert!(accept(&schema, &json!({"id": 1})).is_ok());
    let err = accept(&schema, &json!({"id": "1"})).unwrap_err();
    assert_eq!(err.path, "id");
    assert_eq!(err.message, "Not an integer");
}

#[test]
fn schema_field_keys_are_rendered_verbatim() {
    let schema = Schema::builder()
        .field("[meta]")
        .nested_object([("[0]", is_integer())], Vec::<String>::new())
        .done()
        .field("rows")
        .array_of(is_integer(), None, None)
        .done()
        .build()
        .unwrap();

    let outcome = schema.validate(&json!({"[meta]": {"[0]": "x"}}));
    assert_eq!(outcome.path(), "[meta].[0]");

    let outcome = schema.validate(&json!({"[meta]": {}, "rows": ["x"]}));
    assert_eq!(outcome.path(), "rows[0]");
}
