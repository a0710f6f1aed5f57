//! Prelude module for convenient imports.
//!
//! Provides a single `use beacon_validator::prelude::*;` import that brings
//! in the traits, the validator tree, every factory function and the schema
//! builder.
//!
//! # Examples
//!
//! ```
//! use beacon_validator::prelude::*;
//! use serde_json::json;
//!
//! let tags: Validator = array_of(non_empty_string()).max_size(10).into();
//! assert!(tags.validate(&json!(["a", "b"])).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and outcome
// ============================================================================

pub use crate::foundation::{Outcome, Validate, ValidateExt, Violation};

// ============================================================================
// VALIDATORS: Leaf rules
// ============================================================================

pub use crate::validators::{
    Custom, Pattern, Rule, any, custom, is_array, is_boolean, is_integer, is_object, is_string,
    matches_regex, max_integer, max_length, min_integer, min_length, non_empty_string,
};

// ============================================================================
// COMBINATORS: Logical and structural
// ============================================================================

pub use crate::combinators::{
    ArrayValidator, ObjectValidator, all_of, any_of, array_of, object,
};
pub use crate::validator::Validator;

// ============================================================================
// SCHEMA
// ============================================================================

pub use crate::schema::{
    FieldBuilder, FieldEntry, Requirement, Schema, SchemaBuilder, SchemaError, SchemaResult,
};
