//! Built-in schemas.
//!
//! Schemas are declared in code through the builder; there is no schema
//! language to parse.

use beacon_validator::{Schema, SchemaError};

/// Names usable in document and schema identifiers.
const NAME_PATTERN: &str = "[A-Za-z][A-Za-z0-9_.-]*";

#[derive(Debug)]
pub struct Entry {
    pub name: &'static str,
    pub about: &'static str,
    build: fn() -> Result<Schema, SchemaError>,
}

impl Entry {
    pub fn schema(&self) -> Result<Schema, SchemaError> {
        (self.build)()
    }
}

pub const ENTRIES: &[Entry] = &[
    Entry {
        name: "event",
        about: "event envelope accepted before storage",
        build: event,
    },
    Entry {
        name: "schema",
        about: "registered schema document",
        build: schema_document,
    },
];

pub fn find(name: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|entry| entry.name == name)
}

fn event() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field("schema_name")
        .required()
        .non_empty_string()
        .done()
        .field("schema_version")
        .required()
        .is_integer()
        .min_integer(1)
        .done()
        .field("entity_id")
        .optional()
        .non_empty_string()
        .done()
        .field("event_type")
        .optional()
        .non_empty_string()
        .done()
        .field("payload")
        .required()
        .is_object()
        .done()
        .build()
}

fn schema_document() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field("name")
        .required()
        .non_empty_string()
        .matches_regex(NAME_PATTERN)
        .done()
        .field("version")
        .required()
        .is_integer()
        .min_integer(1)
        .done()
        .field("definition")
        .required()
        .is_object()
        .done()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_validator::Validate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn every_entry_builds() {
        for entry in ENTRIES {
            assert!(entry.schema().is_ok(), "{} failed to build", entry.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("event").map(|e| e.name), Some("event"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn event_envelope() {
        let schema = event().unwrap();
        let ok = json!({"schema_name": "order", "schema_version": 2, "payload": {}});
        assert!(schema.validate(&ok).is_ok());

        let outcome = schema.validate(&json!({"schema_name": "order", "schema_version": 0, "payload": {}}));
        assert_eq!((outcome.message(), outcome.path()), ("Integer < 1", "schema_version"));

        let outcome = schema.validate(&json!({"schema_name": "order", "schema_version": 1, "entity_id": "", "payload": {}}));
        assert_eq!((outcome.message(), outcome.path()), ("Empty string", "entity_id"));

        let outcome = schema.validate(&json!({"schema_name": "order", "schema_version": 1}));
        assert_eq!(outcome.message(), "Missing required field 'payload'");
    }

    #[test]
    fn schema_document_name_pattern() {
        let schema = schema_document().unwrap();
        let doc = |name: &str| json!({"name": name, "version": 1, "definition": {}});
        assert!(schema.validate(&doc("orders.v2")).is_ok());

        let outcome = schema.validate(&doc("2orders"));
        assert_eq!(outcome.path(), "name");
        assert!(outcome.message().starts_with("Does not match regex"));
    }
}
