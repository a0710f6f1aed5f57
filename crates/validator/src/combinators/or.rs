//! OR combinator - logical disjunction of validators
//!
//! Children run in order and the first success wins. When every child
//! fails, their messages are joined into one aggregate failure; individual
//! child paths are dropped, only the messages survive.

use crate::foundation::{Outcome, Validate};
use crate::validator::Validator;
use serde_json::Value;

pub(crate) fn check_any(children: &[Validator], value: &Value) -> Outcome {
    let mut errors = Vec::with_capacity(children.len());

    for child in children {
        let outcome = child.validate(value);
        if outcome.is_ok() {
            return Outcome::ok();
        }
        errors.push(outcome.message().to_owned());
    }

    Outcome::fail(format!("None matched. Errors: {}", errors.join("; ")))
}

/// Combines validators with logical OR.
///
/// # Examples
///
/// ```
/// use beacon_validator::prelude::*;
/// use serde_json::json;
///
/// let id = any_of([is_integer(), non_empty_string()]);
/// assert!(id.validate(&json!(42)).is_ok());
/// assert!(id.validate(&json!("abc")).is_ok());
/// assert_eq!(
///     id.validate(&json!(true)).message(),
///     "None matched. Errors: Not an integer; Not a string"
/// );
/// ```
pub fn any_of(children: impl IntoIterator<Item = Validator>) -> Validator {
    Validator::Or(children.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{custom, is_boolean, is_string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn first_success_wins() {
        let v = any_of([is_string(), is_boolean()]);
        assert!(v.validate(&json!(true)).is_ok());
        assert!(v.validate(&json!("x")).is_ok());
    }

    #[test]
    fn aggregate_keeps_messages_and_drops_paths() {
        let a = custom("a", |_| Outcome::fail_at("A failed", "deep.path"));
        let b = custom("b", |_| Outcome::fail_at("B failed", "[3]"));
        let outcome = any_of([a, b]).validate(&json!(null));
        assert_eq!(
            outcome,
            Outcome::fail("None matched. Errors: A failed; B failed")
        );
    }

    #[test]
    fn empty_or_fails_with_no_errors() {
        let outcome = any_of(Vec::<Validator>::new()).validate(&json!(1));
        assert_eq!(outcome.message(), "None matched. Errors: ");
    }
}
