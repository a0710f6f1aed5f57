//! Fluent schema construction
//!
//! Building is two-phase. A [`FieldBuilder`] accumulates rules for one field
//! and [`FieldBuilder::done`] freezes them into a single [`Validator`]:
//!
//! - no rules: a validator that accepts anything,
//! - one rule: that rule as-is,
//! - several rules: all of them under an implicit AND, in call order.
//!
//! The field builder takes ownership of its [`SchemaBuilder`] and hands it
//! back from `done`, so a half-built field can never be observed or shared.
//! [`SchemaBuilder::build`] then freezes the whole schema.

use super::error::{SchemaError, SchemaResult};
use super::{FieldEntry, Requirement, Schema};
use crate::combinators::{ArrayValidator, all_of, any_of, object};
use crate::validator::Validator;
use crate::validators::{self, Custom, Rule};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// SCHEMA BUILDER
// ============================================================================

/// Accumulates fields for a [`Schema`].
///
/// # Examples
///
/// ```
/// use beacon_validator::prelude::*;
/// use serde_json::json;
///
/// let schema = Schema::builder()
///     .field("name").required().non_empty_string().done()
///     .field("age").optional().is_integer().min_integer(0).done()
///     .build()
///     .unwrap();
///
/// assert!(schema.validate(&json!({"name": "ok"})).is_ok());
/// assert_eq!(schema.validate(&json!({"name": "ok", "age": -1})).path(), "age");
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: IndexMap<String, FieldEntry>,
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts defining field `name`. Fields are required unless
    /// [`FieldBuilder::optional`] is called.
    pub fn field(self, name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            parent: self,
            name: name.into(),
            requirement: Requirement::Required,
            validators: Vec::new(),
        }
    }

    /// Freezes the schema.
    ///
    /// Fails with the first construction problem encountered: an empty
    /// field name or a field defined twice.
    pub fn build(self) -> SchemaResult<Schema> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let nodes: usize = self
            .fields
            .values()
            .map(|entry| entry.validator().node_count())
            .sum();
        tracing::trace!(fields = self.fields.len(), nodes, "schema built");
        Ok(Schema {
            fields: self.fields,
        })
    }

    fn insert(&mut self, name: String, entry: FieldEntry) {
        if self.error.is_some() {
            return;
        }
        if name.is_empty() {
            self.error = Some(SchemaError::EmptyFieldName);
            return;
        }
        match self.fields.entry(name) {
            Entry::Occupied(occupied) => {
                self.error = Some(SchemaError::DuplicateField(occupied.key().clone()));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
            }
        }
    }
}

// ============================================================================
// FIELD BUILDER
// ============================================================================

/// Accumulates the rules for one field.
///
/// Each rule method appends one validator; [`done`](Self::done) commits the
/// field to the owning [`SchemaBuilder`].
#[derive(Debug)]
#[must_use = "a field is only added to the schema when `done()` is called"]
pub struct FieldBuilder {
    parent: SchemaBuilder,
    name: String,
    requirement: Requirement,
    validators: Vec<Validator>,
}

impl FieldBuilder {
    /// Field must be present (the default).
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Field may be absent.
    pub fn optional(mut self) -> Self {
        self.requirement = Requirement::Optional;
        self
    }

    /// Appends any validator.
    pub fn validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validators.push(validator.into());
        self
    }

    /// Appends a caller-supplied check.
    pub fn custom<F>(self, name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> crate::foundation::Outcome + Send + Sync + 'static,
    {
        self.validator(Rule::Custom(Custom::new(name, check)))
    }

    /// See [`validators::is_string`].
    pub fn is_string(self) -> Self {
        self.validator(validators::is_string())
    }

    /// See [`validators::non_empty_string`].
    pub fn non_empty_string(self) -> Self {
        self.validator(validators::non_empty_string())
    }

    /// See [`validators::is_integer`].
    pub fn is_integer(self) -> Self {
        self.validator(validators::is_integer())
    }

    /// See [`validators::is_boolean`].
    pub fn is_boolean(self) -> Self {
        self.validator(validators::is_boolean())
    }

    /// See [`validators::is_array`].
    pub fn is_array(self) -> Self {
        self.validator(validators::is_array())
    }

    /// See [`validators::is_object`].
    pub fn is_object(self) -> Self {
        self.validator(validators::is_object())
    }

    /// See [`validators::min_length`].
    pub fn min_length(self, min: usize) -> Self {
        self.validator(validators::min_length(min))
    }

    /// See [`validators::max_length`].
    pub fn max_length(self, max: usize) -> Self {
        self.validator(validators::max_length(max))
    }

    /// See [`validators::matches_regex`].
    pub fn matches_regex(self, pattern: impl Into<String>) -> Self {
        self.validator(validators::matches_regex(pattern))
    }

    /// See [`validators::min_integer`].
    pub fn min_integer(self, min: i64) -> Self {
        self.validator(validators::min_integer(min))
    }

    /// See [`validators::max_integer`].
    pub fn max_integer(self, max: i64) -> Self {
        self.validator(validators::max_integer(max))
    }

    /// Appends an explicit AND of `validators`.
    pub fn and_validator(self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validator(all_of(validators))
    }

    /// Appends an OR of `validators`.
    pub fn or_validator(self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validator(any_of(validators))
    }

    /// Appends an object validator over `members`, requiring `required`.
    pub fn nested_object<K, R>(
        self,
        members: impl IntoIterator<Item = (K, Validator)>,
        required: impl IntoIterator<Item = R>,
    ) -> Self
    where
        K: Into<String>,
        R: Into<String>,
    {
        self.validator(object(members, required))
    }

    /// Appends an array validator applying `element` to every item.
    pub fn array_of(
        self,
        element: impl Into<Validator>,
        min_size: Option<usize>,
        max_size: Option<usize>,
    ) -> Self {
        self.validator(ArrayValidator::new(element).with_bounds(min_size, max_size))
    }

    /// Commits the field and returns the schema builder.
    pub fn done(self) -> SchemaBuilder {
        let Self {
            mut parent,
            name,
            requirement,
            validators,
        } = self;
        let entry = FieldEntry {
            validator: finalize(validators),
            requirement,
        };
        parent.insert(name, entry);
        parent
    }
}

fn finalize(mut validators: Vec<Validator>) -> Validator {
    match validators.len() {
        0 => validators::any(),
        1 => validators.remove(0),
        _ => Validator::And(validators),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use crate::validators::{is_integer, is_string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn finalize_shapes() {
        assert!(matches!(finalize(vec![]), Validator::Leaf(Rule::Any)));
        assert!(matches!(
            finalize(vec![is_string()]),
            Validator::Leaf(Rule::IsString)
        ));
        assert!(matches!(
            finalize(vec![is_string(), is_integer()]),
            Validator::And(children) if children.len() == 2
        ));
    }

    #[test]
    fn field_without_rules_accepts_anything_present() {
        let schema = SchemaBuilder::new().field("x").done().build().unwrap();
        assert!(schema.validate(&json!({"x": null})).is_ok());
        assert!(schema.validate(&json!({"x": [1, {}]})).is_ok());
        assert_eq!(
            schema.validate(&json!({})).message(),
            "Missing required field 'x'"
        );
    }

    #[test]
    fn fields_default_to_required_and_last_toggle_wins() {
        let schema = SchemaBuilder::new()
            .field("a")
            .done()
            .field("b")
            .optional()
            .required()
            .done()
            .field("c")
            .required()
            .optional()
            .done()
            .build()
            .unwrap();

        let requirements: Vec<_> = schema
            .fields()
            .map(|(name, entry)| (name, entry.requirement()))
            .collect();
        assert_eq!(
            requirements,
            [
                ("a", Requirement::Required),
                ("b", Requirement::Required),
                ("c", Requirement::Optional),
            ]
        );
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let err = SchemaBuilder::new()
            .field("a")
            .is_string()
            .done()
            .field("a")
            .is_integer()
            .done()
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField("a".into()));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = SchemaBuilder::new().field("").done().build().unwrap_err();
        assert_eq!(err, SchemaError::EmptyFieldName);
    }

    #[test]
    fn first_error_is_kept() {
        let err = SchemaBuilder::new()
            .field("")
            .done()
            .field("a")
            .done()
            .field("a")
            .done()
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::EmptyFieldName);
    }

    #[test]
    fn rules_run_in_call_order() {
        let schema = SchemaBuilder::new()
            .field("v")
            .max_length(2)
            .is_string()
            .done()
            .build()
            .unwrap();
        assert_eq!(
            schema.validate(&json!({"v": 5})).message(),
            "Value has no length"
        );
    }

    #[test]
    fn structural_rules() {
        let schema = SchemaBuilder::new()
            .field("tags")
            .array_of(is_string(), Some(1), Some(2))
            .done()
            .field("owner")
            .optional()
            .nested_object([("id", is_integer())], ["id"])
            .done()
            .field("mode")
            .optional()
            .or_validator([validators::matches_regex("r|w"), is_integer()])
            .done()
            .field("count")
            .optional()
            .and_validator([is_integer(), validators::min_integer(1)])
            .done()
            .build()
            .unwrap();

        assert!(
            schema
                .validate(&json!({"tags": ["a"], "owner": {"id": 1}, "mode": "r", "count": 2}))
                .is_ok()
        );
        assert_eq!(
            schema.validate(&json!({"tags": []})).message(),
            "Array size < 1"
        );
        assert_eq!(schema.validate(&json!({"tags": ["a", 2]})).path(), "tags[1]");
        assert_eq!(
            schema.validate(&json!({"tags": ["a"], "owner": {}})).message(),
            "Required field 'id' not found"
        );
        assert_eq!(
            schema.validate(&json!({"tags": ["a"], "owner": {}})).path(),
            "owner"
        );
        assert_eq!(
            schema.validate(&json!({"tags": ["a"], "mode": "x"})).message(),
            "None matched. Errors: Does not match regex: r|w; Not an integer"
        );
        assert_eq!(
            schema.validate(&json!({"tags": ["a"], "count": 0})),
            crate::foundation::Outcome::fail_at("Integer < 1", "count")
        );
    }

    #[test]
    fn custom_rule() {
        let schema = SchemaBuilder::new()
            .field("even")
            .is_integer()
            .custom("even", |v| {
                if v.as_i64().is_some_and(|n| n % 2 == 0) {
                    crate::foundation::Outcome::ok()
                } else {
                    crate::foundation::Outcome::fail("Not even")
                }
            })
            .done()
            .build()
            .unwrap();
        assert!(schema.validate(&json!({"even": 2})).is_ok());
        assert_eq!(schema.validate(&json!({"even": 3})).message(), "Not even");
    }
}
