//! Type-tag validators
//!
//! Each check inspects only the kind of the value. `non_empty_string` adds a
//! content check that runs only once the type check has passed.

use crate::foundation::Outcome;
use crate::json;
use serde_json::Value;

pub(crate) fn string(value: &Value) -> Outcome {
    ensure(value.is_string(), "Not a string")
}

pub(crate) fn boolean(value: &Value) -> Outcome {
    ensure(value.is_boolean(), "Not a boolean")
}

pub(crate) fn array(value: &Value) -> Outcome {
    ensure(value.is_array(), "Not an array")
}

pub(crate) fn object(value: &Value) -> Outcome {
    ensure(value.is_object(), "Not an object")
}

pub(crate) fn integer(value: &Value) -> Outcome {
    ensure(json::is_integer(value), "Not an integer")
}

pub(crate) fn non_empty_string(value: &Value) -> Outcome {
    match value.as_str() {
        None => Outcome::fail("Not a string"),
        Some("") => Outcome::fail("Empty string"),
        Some(_) => Outcome::ok(),
    }
}

#[inline]
fn ensure(condition: bool, message: &'static str) -> Outcome {
    if condition {
        Outcome::ok()
    } else {
        Outcome::fail(message)
    }
}
