//! Regular expression validator
//!
//! The pattern is compiled on first use, not at construction, and the
//! compiled form (or the compile error) is cached for the lifetime of the
//! validator. A malformed pattern therefore surfaces as an ordinary failed
//! [`Outcome`] on every call, never as a construction error or a panic.
//!
//! Matching is anchored at both ends: the whole string must match.

use crate::foundation::Outcome;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// A lazily compiled, fully anchored regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    compiled: OnceLock<Result<Regex, String>>,
}

impl Pattern {
    /// Creates a pattern without compiling it.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceLock::new(),
        }
    }

    /// The pattern as written by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn evaluate(&self, value: &Value) -> Outcome {
        let Some(text) = value.as_str() else {
            return Outcome::fail("Not a string for regex");
        };

        match self.compiled() {
            Ok(re) if re.is_match(text) => Outcome::ok(),
            Ok(_) => Outcome::fail(format!("Does not match regex: {}", self.source)),
            Err(reason) => Outcome::fail(format!("Invalid regex: {reason}")),
        }
    }

    fn compiled(&self) -> &Result<Regex, String> {
        self.compiled.get_or_init(|| compile(&self.source))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

fn compile(source: &str) -> Result<Regex, String> {
    // Compile the raw source first so errors point at what the caller wrote,
    // not at the anchoring wrapper.
    Regex::new(source)
        .and_then(|_| Regex::new(&format!("^(?:{source})$")))
        .map_err(|e| {
            tracing::warn!(pattern = source, error = %e, "invalid regex pattern");
            e.to_string()
        })
}
