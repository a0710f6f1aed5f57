//! Array validator
//!
//! Applies one element validator to every element, in index order, after
//! optional size bounds. Stops at the first failing element and reports its
//! index as the path segment.

use crate::foundation::{Outcome, Validate};
use crate::validator::Validator;
use serde_json::Value;

/// Validates every element of an array with a single validator.
///
/// # Examples
///
/// ```
/// use beacon_validator::prelude::*;
/// use serde_json::json;
///
/// let v: Validator = array_of(is_integer()).min_size(1).max_size(3).into();
/// assert_eq!(v.validate(&json!([])).message(), "Array size < 1");
/// assert!(v.validate(&json!([1, 2])).is_ok());
/// assert_eq!(v.validate(&json!(["x"])).path(), "[0]");
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    element: Box<Validator>,
    min_size: Option<usize>,
    max_size: Option<usize>,
}

impl ArrayValidator {
    /// Creates an unbounded array validator.
    pub fn new(element: impl Into<Validator>) -> Self {
        Self {
            element: Box::new(element.into()),
            min_size: None,
            max_size: None,
        }
    }

    /// Requires at least `min` elements.
    pub fn min_size(mut self, min: usize) -> Self {
        self.min_size = Some(min);
        self
    }

    /// Allows at most `max` elements.
    pub fn max_size(mut self, max: usize) -> Self {
        self.max_size = Some(max);
        self
    }

    /// Sets both bounds at once; `None` leaves a side unbounded.
    pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// The element validator.
    pub fn element(&self) -> &Validator {
        &self.element
    }

    /// Lower size bound, if any.
    pub fn min(&self) -> Option<usize> {
        self.min_size
    }

    /// Upper size bound, if any.
    pub fn max(&self) -> Option<usize> {
        self.max_size
    }

    pub(crate) fn evaluate(&self, value: &Value) -> Outcome {
        let Some(items) = value.as_array() else {
            return Outcome::fail("Not an array");
        };

        let size = items.len();
        if let Some(min) = self.min_size.filter(|&min| size < min) {
            return Outcome::fail(format!("Array size < {min}"));
        }
        if let Some(max) = self.max_size.filter(|&max| size > max) {
            return Outcome::fail(format!("Array size > {max}"));
        }

        for (index, item) in items.iter().enumerate() {
            let outcome = self.element.validate(item);
            if outcome.is_err() {
                return outcome.prepend_index(index);
            }
        }

        Outcome::ok()
    }
}

impl From<ArrayValidator> for Validator {
    fn from(array: ArrayValidator) -> Self {
        Validator::Array(array)
    }
}

/// Shorthand for [`ArrayValidator::new`].
pub fn array_of(element: impl Into<Validator>) -> ArrayValidator {
    ArrayValidator::new(element)
}
