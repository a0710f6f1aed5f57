//! Built-in leaf validators
//!
//! A [`Rule`] is a single check over one value: a type test, a length or
//! integer bound, a regular expression, or a caller-supplied closure. Rules
//! are the leaves of a [`Validator`] tree; the factory functions in this
//! module return them already wrapped as `Validator::Leaf` so they compose
//! directly with the combinators.
//!
//! # Examples
//!
//! ```
//! use beacon_validator::prelude::*;
//! use serde_json::json;
//!
//! let username = all_of([non_empty_string(), max_length(20), matches_regex("[a-z0-9_]+")]);
//! assert!(username.validate(&json!("alice_01")).is_ok());
//! assert_eq!(username.validate(&json!("")).message(), "Empty string");
//! ```

pub mod custom;
mod kind;
mod length;
pub mod pattern;
mod range;

pub use custom::Custom;
pub use pattern::Pattern;

use crate::foundation::{Outcome, Validate};
use crate::validator::Validator;
use serde_json::Value;

// ============================================================================
// RULE
// ============================================================================

/// A leaf check.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Accepts every value.
    Any,
    /// Value is a string.
    IsString,
    /// Value is a non-empty string.
    NonEmptyString,
    /// Value is a boolean.
    IsBoolean,
    /// Value is an array.
    IsArray,
    /// Value is an object.
    IsObject,
    /// Value is an integer.
    IsInteger,
    /// Value is an integer `>= n`.
    MinInteger(i64),
    /// Value is an integer `<= n`.
    MaxInteger(i64),
    /// String or array with at least `n` chars/elements.
    MinLength(usize),
    /// String or array with at most `n` chars/elements.
    MaxLength(usize),
    /// String fully matching a regular expression.
    Pattern(Pattern),
    /// Caller-supplied check.
    Custom(Custom),
}

impl Validate for Rule {
    fn validate(&self, value: &Value) -> Outcome {
        match self {
            Rule::Any => Outcome::ok(),
            Rule::IsString => kind::string(value),
            Rule::NonEmptyString => kind::non_empty_string(value),
            Rule::IsBoolean => kind::boolean(value),
            Rule::IsArray => kind::array(value),
            Rule::IsObject => kind::object(value),
            Rule::IsInteger => kind::integer(value),
            Rule::MinInteger(min) => range::min_integer(value, *min),
            Rule::MaxInteger(max) => range::max_integer(value, *max),
            Rule::MinLength(min) => length::min_length(value, *min),
            Rule::MaxLength(max) => length::max_length(value, *max),
            Rule::Pattern(pattern) => pattern.evaluate(value),
            Rule::Custom(custom) => custom.evaluate(value),
        }
    }

    fn name(&self) -> &str {
        match self {
            Rule::Any => "any",
            Rule::IsString => "is_string",
            Rule::NonEmptyString => "non_empty_string",
            Rule::IsBoolean => "is_boolean",
            Rule::IsArray => "is_array",
            Rule::IsObject => "is_object",
            Rule::IsInteger => "is_integer",
            Rule::MinInteger(_) => "min_integer",
            Rule::MaxInteger(_) => "max_integer",
            Rule::MinLength(_) => "min_length",
            Rule::MaxLength(_) => "max_length",
            Rule::Pattern(_) => "matches_regex",
            Rule::Custom(custom) => custom.name(),
        }
    }
}

impl From<Rule> for Validator {
    fn from(rule: Rule) -> Self {
        Validator::Leaf(rule)
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Accepts every value.
#[must_use]
pub fn any() -> Validator {
    Rule::Any.into()
}

/// Fails `"Not a string"` unless the value is a string.
#[must_use]
pub fn is_string() -> Validator {
    Rule::IsString.into()
}

/// Requires a string (`"Not a string"`) that is non-empty (`"Empty string"`).
#[must_use]
pub fn non_empty_string() -> Validator {
    Rule::NonEmptyString.into()
}

/// Fails `"Not a boolean"` unless the value is a boolean.
#[must_use]
pub fn is_boolean() -> Validator {
    Rule::IsBoolean.into()
}

/// Fails `"Not an array"` unless the value is an array.
#[must_use]
pub fn is_array() -> Validator {
    Rule::IsArray.into()
}

/// Fails `"Not an object"` unless the value is an object.
#[must_use]
pub fn is_object() -> Validator {
    Rule::IsObject.into()
}

/// Fails `"Not an integer"` unless the value is an integral JSON number.
#[must_use]
pub fn is_integer() -> Validator {
    Rule::IsInteger.into()
}

/// Integer `>= min`, else `"Integer < min"`.
#[must_use]
pub fn min_integer(min: i64) -> Validator {
    Rule::MinInteger(min).into()
}

/// Integer `<= max`, else `"Integer > max"`.
#[must_use]
pub fn max_integer(max: i64) -> Validator {
    Rule::MaxInteger(max).into()
}

/// At least `min` chars (string) or elements (array).
#[must_use]
pub fn min_length(min: usize) -> Validator {
    Rule::MinLength(min).into()
}

/// At most `max` chars (string) or elements (array).
#[must_use]
pub fn max_length(max: usize) -> Validator {
    Rule::MaxLength(max).into()
}

/// String matching `pattern` in full. Compiled on first use.
#[must_use]
pub fn matches_regex(pattern: impl Into<String>) -> Validator {
    Rule::Pattern(Pattern::new(pattern)).into()
}

/// Leaf backed by a closure returning an [`Outcome`].
pub fn custom<F>(name: impl Into<std::borrow::Cow<'static, str>>, check: F) -> Validator
where
    F: Fn(&Value) -> Outcome + Send + Sync + 'static,
{
    Rule::Custom(Custom::new(name, check)).into()
}
