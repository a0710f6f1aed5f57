//! Object validator
//!
//! Validates named members of a JSON object against their own validators and
//! enforces a set of required members. Members are checked in insertion
//! order, so when several are invalid the first declared one is reported.

use crate::foundation::{Outcome, Validate};
use crate::validator::Validator;
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// Validates an object's members against a nested sub-schema.
///
/// Members without a validator entry are ignored. A member that has a
/// validator but is absent is treated as optional unless it is listed as
/// required.
///
/// # Examples
///
/// ```
/// use beacon_validator::prelude::*;
/// use serde_json::json;
///
/// let address = ObjectValidator::new()
///     .member("city", non_empty_string())
///     .member("zip", matches_regex("[0-9]{5}"))
///     .require("city");
///
/// let v: Validator = address.into();
/// assert!(v.validate(&json!({"city": "Lyon"})).is_ok());
/// assert_eq!(v.validate(&json!({"city": "Lyon", "zip": "x"})).path(), "zip");
/// assert_eq!(
///     v.validate(&json!({"zip": "69001"})).message(),
///     "Required field 'city' not found"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    members: IndexMap<String, Validator>,
    required: IndexSet<String>,
}

impl ObjectValidator {
    /// Creates an object validator with no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the validator for member `name`.
    pub fn member(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.members.insert(name.into(), validator.into());
        self
    }

    /// Marks member `name` as required.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.insert(name.into());
        self
    }

    /// Member validators in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.members.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Required member names in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    pub(crate) fn evaluate(&self, value: &Value) -> Outcome {
        let Some(object) = value.as_object() else {
            return Outcome::fail("Not an object");
        };

        if let Some(missing) = self.required.iter().find(|name| !object.contains_key(*name)) {
            return Outcome::fail(format!("Required field '{missing}' not found"));
        }

        for (name, validator) in &self.members {
            let Some(member) = object.get(name) else {
                continue;
            };
            let outcome = validator.validate(member);
            if outcome.is_err() {
                return outcome.prepend_field(name);
            }
        }

        Outcome::ok()
    }
}

impl From<ObjectValidator> for Validator {
    fn from(object: ObjectValidator) -> Self {
        Validator::Object(object)
    }
}

/// Builds an object validator from `(name, validator)` pairs and required names.
///
/// # Examples
///
/// ```
/// use beacon_validator::prelude::*;
/// use serde_json::json;
///
/// let point = object([("x", is_integer()), ("y", is_integer())], ["x", "y"]);
/// assert!(point.validate(&json!({"x": 1, "y": 2})).is_ok());
/// ```
pub fn object<K, R>(
    members: impl IntoIterator<Item = (K, Validator)>,
    required: impl IntoIterator<Item = R>,
) -> Validator
where
    K: Into<String>,
    R: Into<String>,
{
    let members = members
        .into_iter()
        .map(|(name, validator)| (name.into(), validator))
        .collect();
    let required = required.into_iter().map(Into::into).collect();
    Validator::Object(ObjectValidator { members, required })
}
