//! Schemas: the top-level, immutable description of an object document
//!
//! A [`Schema`] maps field names to a finalized [`Validator`] and a
//! [`Requirement`]. It is assembled once through [`SchemaBuilder`] and then
//! only read: `validate` takes `&self`, keeps no state between calls and
//! performs no I/O, so one schema can serve any number of threads.
//!
//! Fields are checked in the order they were defined. When several fields
//! are invalid, the first defined one is reported.

mod builder;
mod error;

pub use builder::{FieldBuilder, SchemaBuilder};
pub use error::{SchemaError, SchemaResult};

use crate::foundation::{Outcome, Validate};
use crate::json;
use crate::validator::Validator;
use indexmap::IndexMap;
use serde_json::Value;

// ============================================================================
// FIELD ENTRY
// ============================================================================

/// Whether a schema field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Requirement {
    /// Absence fails validation.
    #[default]
    Required,
    /// Absence is accepted.
    Optional,
}

/// A finalized field: its validator and whether it must be present.
#[derive(Debug, Clone)]
pub struct FieldEntry {
    validator: Validator,
    requirement: Requirement,
}

impl FieldEntry {
    /// The validator applied when the field is present.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Whether the field must be present.
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Shorthand for `requirement() == Requirement::Required`.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable set of field rules for validating a whole object.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldEntry>,
}

impl Schema {
    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.get(name)
    }

    /// Fields in definition order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
        self.fields.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    fn evaluate(&self, value: &Value) -> Outcome {
        let Some(document) = value.as_object() else {
            return Outcome::fail("Root is not an object");
        };

        for (name, entry) in &self.fields {
            match document.get(name) {
                Some(member) => {
                    let outcome = entry.validator.validate(member);
                    if outcome.is_err() {
                        return outcome.prepend_field(name);
                    }
                }
                None if entry.is_required() => {
                    return Outcome::fail(format!("Missing required field '{name}'"));
                }
                None => {}
            }
        }

        Outcome::ok()
    }
}

impl Validate for Schema {
    fn validate(&self, value: &Value) -> Outcome {
        let outcome = self.evaluate(value);
        if outcome.is_err() {
            tracing::debug!(
                path = outcome.path(),
                message = outcome.message(),
                root = json::kind_name(value),
                "schema rejected value"
            );
        }
        outcome
    }

    fn name(&self) -> &str {
        "schema"
    }
}
