//! Integer bound validators
//!
//! Bounds apply only to integers; anything else fails the type check first.
//! Comparison is exact across the whole `i64`/`u64` range.

use crate::foundation::Outcome;
use crate::json;
use serde_json::Value;

pub(crate) fn min_integer(value: &Value, min: i64) -> Outcome {
    match json::as_integer(value) {
        None => Outcome::fail("Not an integer"),
        Some(n) if n < i128::from(min) => Outcome::fail(format!("Integer < {min}")),
        Some(_) => Outcome::ok(),
    }
}

pub(crate) fn max_integer(value: &Value, max: i64) -> Outcome {
    match json::as_integer(value) {
        None => Outcome::fail("Not an integer"),
        Some(n) if n > i128::from(max) => Outcome::fail(format!("Integer > {max}")),
        Some(_) => Outcome::ok(),
    }
}
