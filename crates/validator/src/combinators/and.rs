//! AND combinator - logical conjunction of validators
//!
//! Children run in order and validation stops at the first failure. The
//! failing child's outcome is returned verbatim: the combinator adds no path
//! segment of its own, structural context comes from the enclosing object or
//! array validator.

use crate::foundation::{Outcome, Validate};
use crate::validator::Validator;
use serde_json::Value;

pub(crate) fn check_all(children: &[Validator], value: &Value) -> Outcome {
    children
        .iter()
        .map(|child| child.validate(value))
        .find(Outcome::is_err)
        .unwrap_or_default()
}

/// Combines validators with logical AND.
///
/// # Examples
///
/// ```
/// use beacon_validator::prelude::*;
/// use serde_json::json;
///
/// let v = all_of([is_integer(), min_integer(0), max_integer(10)]);
/// assert!(v.validate(&json!(5)).is_ok());
/// assert_eq!(v.validate(&json!(11)).message(), "Integer > 10");
/// ```
pub fn all_of(children: impl IntoIterator<Item = Validator>) -> Validator {
    Validator::And(children.into_iter().collect())
}
