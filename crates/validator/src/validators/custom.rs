//! Caller-supplied leaf validators.

use crate::foundation::Outcome;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type CheckFn = dyn Fn(&Value) -> Outcome + Send + Sync;

/// A named closure used as a leaf check.
///
/// The closure is shared (`Arc`) so cloning a validator tree stays cheap and
/// the finished schema remains `Send + Sync`.
#[derive(Clone)]
pub struct Custom {
    name: Cow<'static, str>,
    check: Arc<CheckFn>,
}

impl Custom {
    /// Wraps `check` under `name`.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Builds a check from a boolean predicate and a fixed failure message.
    pub fn predicate<F>(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::new(name, move |value| {
            if predicate(value) {
                Outcome::ok()
            } else {
                Outcome::fail(message.clone())
            }
        })
    }

    /// The name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn evaluate(&self, value: &Value) -> Outcome {
        (self.check)(value)
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("name", &self.name)
            .field("check", &"<function>")
            .finish()
    }
}
