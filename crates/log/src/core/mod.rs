//! Error types

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Failure to set up logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The level directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// The format name is not one of `pretty`, `compact` or `json`.
    #[error("unknown log format '{0}'")]
    Format(String),

    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
