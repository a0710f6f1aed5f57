//! Length validators
//!
//! Polymorphic over strings and arrays: strings are measured in Unicode
//! scalar values (chars), arrays in elements. Any other kind has no length
//! and fails.

use crate::foundation::Outcome;
use crate::json::Length;
use serde_json::Value;

pub(crate) fn min_length(value: &Value, min: usize) -> Outcome {
    match Length::of(value) {
        None => Outcome::fail("Value has no length"),
        Some(len) if len.count() < min => Outcome::fail(format!("{} < {min}", len.label())),
        Some(_) => Outcome::ok(),
    }
}

pub(crate) fn max_length(value: &Value, max: usize) -> Outcome {
    match Length::of(value) {
        None => Outcome::fail("Value has no length"),
        Some(len) if len.count() > max => Outcome::fail(format!("{} > {max}", len.label())),
        Some(_) => Outcome::ok(),
    }
}
