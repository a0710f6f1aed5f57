//! Core traits for the validation system
//!
//! Every node of a validator tree, and the schema built on top of it,
//! answers the same question: does this value conform, and if not, where
//! does it break? That single capability is [`Validate`].

use super::Outcome;
use serde_json::Value;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The capability shared by every validator kind.
///
/// Implementations must be pure: the same value always produces the same
/// outcome, and validation never mutates the validator or the input.
///
/// # Examples
///
/// ```
/// use beacon_validator::foundation::{Outcome, Validate};
/// use serde_json::{Value, json};
///
/// struct IsNull;
///
/// impl Validate for IsNull {
///     fn validate(&self, value: &Value) -> Outcome {
///         if value.is_null() {
///             Outcome::ok()
///         } else {
///             Outcome::fail("Not null")
///         }
///     }
/// }
///
/// assert!(IsNull.validate(&json!(null)).is_ok());
/// assert_eq!(IsNull.validate(&json!(1)).message(), "Not null");
/// ```
pub trait Validate {
    /// Checks `value` and reports the outcome.
    fn validate(&self, value: &Value) -> Outcome;

    /// Returns the name of this validator.
    ///
    /// Used for diagnostics only.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    fn validate(&self, value: &Value) -> Outcome {
        (**self).validate(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Convenience checks layered on top of [`Validate`].
pub trait ValidateExt: Validate {
    /// Returns `true` if `value` passes.
    fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }

    /// Validates and converts the outcome into a `Result`.
    fn check(&self, value: &Value) -> Result<(), super::Violation> {
        self.validate(value).into_result()
    }
}

impl<V: Validate + ?Sized> ValidateExt for V {}
