//! # beacon-validator
//!
//! A composable, declarative validation engine for JSON documents.
//!
//! Given a [`serde_json::Value`] and a schema built from a small algebra of
//! validators, it decides whether the value conforms and, if not, reports
//! where in the value's structure the violation occurred.
//!
//! ## Quick Start
//!
//! ```
//! use beacon_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("name").required().non_empty_string().done()
//!     .field("age").optional().is_integer().min_integer(0).done()
//!     .field("tags").optional().array_of(non_empty_string(), None, Some(8)).done()
//!     .build()?;
//!
//! assert!(schema.validate(&json!({"name": "ok"})).is_ok());
//!
//! let outcome = schema.validate(&json!({"name": "ok", "tags": ["a", ""]}));
//! assert_eq!(outcome.path(), "tags[1]");
//! assert_eq!(outcome.message(), "Empty string");
//! # Ok::<(), SchemaError>(())
//! ```
//!
//! ## Building blocks
//!
//! - **Outcome**: [`Outcome`](foundation::Outcome), success or a message
//!   plus a structural path (`user.address.city`, `tags[1]`).
//! - **Leaf rules**: type checks, length and integer bounds, full-string
//!   regex matching, custom closures ([`validators`]).
//! - **Combinators**: AND / OR plus the structural object and array
//!   validators ([`combinators`]).
//! - **Schema**: a fluent two-phase builder producing an immutable,
//!   thread-safe [`Schema`](schema::Schema).
//!
//! Invalid data never produces an `Err` or a panic; only mistakes in how a
//! schema was assembled do ([`SchemaError`](schema::SchemaError)).

pub mod combinators;
pub mod foundation;
pub mod json;
pub mod prelude;
pub mod schema;
pub mod validator;
pub mod validators;

pub use foundation::{Outcome, Validate, ValidateExt, Violation};
pub use schema::{Schema, SchemaBuilder, SchemaError};
pub use validator::Validator;
