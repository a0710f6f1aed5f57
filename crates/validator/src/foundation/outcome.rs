//! Validation outcome
//!
//! Every validator reports through [`Outcome`]: a success flag, a message and
//! a structural path pointing at the offending part of the input. Paths are
//! assembled innermost-first: a failing leaf reports an empty path and each
//! enclosing structural validator prepends its own segment on the way out.
//!
//! The outcome remembers whether its path starts with an index segment, so a
//! member key that merely looks like `[0]` is still joined with a `.`.

use serde::Serialize;
use std::fmt;

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of validating a single value.
///
/// A successful outcome always has an empty message and an empty path; the
/// fields are private so that invariant cannot be broken from outside.
///
/// # Examples
///
/// ```
/// use beacon_validator::foundation::Outcome;
///
/// let outcome = Outcome::fail("Not a string").prepend_path("[2]").prepend_path("tags");
/// assert_eq!(outcome.path(), "tags[2]");
/// assert_eq!(outcome.message(), "Not a string");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    success: bool,
    message: String,
    path: String,
    #[serde(skip)]
    leading_index: bool,
}

impl Outcome {
    /// A successful outcome.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            message: String::new(),
            path: String::new(),
            leading_index: false,
        }
    }

    /// A failure at the current position (empty path).
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::fail_at(message, "")
    }

    /// A failure with an explicit path.
    ///
    /// A path given as text starting with `[` is taken to start with an
    /// index segment.
    #[must_use]
    pub fn fail_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            success: false,
            message: message.into(),
            leading_index: path.starts_with('['),
            path,
        }
    }

    /// Returns `true` when validation passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Returns `true` when validation failed.
    #[must_use]
    pub fn is_err(&self) -> bool {
        !self.success
    }

    /// Failure message; empty on success.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structural path of the failure; empty on success or at the root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Prefixes the path with an object member name.
    ///
    /// No-op on success. The name is used verbatim, whatever characters it
    /// contains: `{"a": {"[0]": 1}}` fails at `a.[0]`, not `a[0]`.
    #[must_use]
    pub fn prepend_field(self, name: &str) -> Self {
        if self.success || name.is_empty() {
            return self;
        }
        let path = self.joined(name);
        Self {
            path,
            leading_index: false,
            ..self
        }
    }

    /// Prefixes the path with an array index segment (`[i]`).
    ///
    /// No-op on success.
    #[must_use]
    pub fn prepend_index(self, index: usize) -> Self {
        if self.success {
            return self;
        }
        Self {
            path: format!("[{index}]{}", self.path),
            leading_index: true,
            ..self
        }
    }

    /// Prefixes the path with an already rendered segment.
    ///
    /// No-op on success. A prefix starting with `[` counts as an index
    /// segment; the join itself follows the existing path's first segment:
    ///
    /// | prefix | path      | result        |
    /// |--------|-----------|---------------|
    /// | `a`    | ``        | `a`           |
    /// | `a`    | `b`       | `a.b`         |
    /// | `a`    | `[1]`     | `a[1]`        |
    /// | `[0]`  | `name`    | `[0].name`    |
    #[must_use]
    pub fn prepend_path(self, prefix: &str) -> Self {
        if self.success || prefix.is_empty() {
            return self;
        }
        let path = self.joined(prefix);
        Self {
            path,
            leading_index: prefix.starts_with('['),
            ..self
        }
    }

    fn joined(&self, prefix: &str) -> String {
        if self.path.is_empty() {
            prefix.to_owned()
        } else if self.leading_index {
            format!("{prefix}{}", self.path)
        } else {
            format!("{prefix}.{}", self.path)
        }
    }

    /// Converts into a `Result`, for callers that want to propagate with `?`.
    pub fn into_result(self) -> Result<(), Violation> {
        if self.success {
            Ok(())
        } else {
            Err(Violation {
                message: self.message,
                path: self.path,
            })
        }
    }
}

/// Outcomes are equal when they render the same.
impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.success == other.success && self.message == other.message && self.path == other.path
    }
}

impl Eq for Outcome {}

impl Default for Outcome {
    fn default() -> Self {
        Self::ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.success, self.path.is_empty()) {
            (true, _) => f.write_str("ok"),
            (false, true) => f.write_str(&self.message),
            (false, false) => write!(f, "{}: {}", self.path, self.message),
        }
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A failed [`Outcome`] in error form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render(.message, .path))]
pub struct Violation {
    /// Failure message.
    pub message: String,
    /// Structural path of the failure.
    pub path: String,
}

fn render(message: &str, path: &str) -> String {
    if path.is_empty() {
        message.to_owned()
    } else {
        format!("{message} (at '{path}')")
    }
}

impl From<Violation> for Outcome {
    fn from(violation: Violation) -> Self {
        Outcome::fail_at(violation.message, violation.path)
    }
}
