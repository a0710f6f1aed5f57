//! Helpers for inspecting `serde_json::Value`.
//!
//! The engine only needs three things from its input: the kind of a value,
//! object members by name and array elements by index. These helpers keep
//! the numeric and length rules in one place.

use serde_json::Value;

/// Returns the value as an exact integer, if it is one.
///
/// JSON numbers stored as `i64` or `u64` qualify; floats never do, even when
/// they have no fractional part. `i128` covers both ranges without loss.
#[must_use]
pub fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        _ => None,
    }
}

/// Returns `true` if the value is an integer in the sense of [`as_integer`].
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    as_integer(value).is_some()
}

/// Length of a string (in chars) or an array (in elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// Unicode scalar count of a string.
    String(usize),
    /// Element count of an array.
    Array(usize),
}

impl Length {
    /// Measures `value`; `None` for kinds without a length.
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::String(s.chars().count())),
            Value::Array(items) => Some(Self::Array(items.len())),
            _ => None,
        }
    }

    /// The measured count.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::String(n) | Self::Array(n) => n,
        }
    }

    /// Noun used in failure messages ("String length", "Array size").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::String(_) => "String length",
            Self::Array(_) => "Array size",
        }
    }
}

/// Short name of the value's kind, for diagnostics.
#[must_use]
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) if is_integer(value) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn integers_cover_full_unsigned_range() {
        assert_eq!(as_integer(&json!(u64::MAX)), Some(i128::from(u64::MAX)));
        assert_eq!(as_integer(&json!(i64::MIN)), Some(i128::from(i64::MIN)));
    }

    #[test]
    fn floats_are_not_integers() {
        assert_eq!(as_integer(&json!(5.0)), None);
        assert_eq!(as_integer(&json!("5")), None);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert_eq!(Length::of(&json!("héllo")), Some(Length::String(5)));
        assert_eq!(Length::of(&json!([1, 2])), Some(Length::Array(2)));
        assert_eq!(Length::of(&json!(5)), None);
    }

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!(true), "boolean")]
    #[case(json!(1), "integer")]
    #[case(json!(1.5), "number")]
    #[case(json!("x"), "string")]
    #[case(json!([]), "array")]
    #[case(json!({}), "object")]
    fn kind_names(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(kind_name(&value), expected);
    }
}
