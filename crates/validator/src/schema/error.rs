//! Schema construction errors.

use thiserror::Error;

/// Problems detected while finalizing a [`Schema`](super::Schema).
///
/// These concern how a schema was assembled, never the data it validates;
/// validation failures are always reported through
/// [`Outcome`](crate::foundation::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The same field name was defined twice.
    #[error("field '{0}' is defined more than once")]
    DuplicateField(String),

    /// A field was defined with an empty name.
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// Result alias for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;
