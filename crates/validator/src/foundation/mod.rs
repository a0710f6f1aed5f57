//! Core validation types and traits
//!
//! - **Outcome**: [`Outcome`], the success/failure record every validator returns,
//!   and [`Violation`], its `Result`-friendly error form.
//! - **Traits**: [`Validate`], [`ValidateExt`].
//!
//! Failures are data. Nothing in the engine panics or returns `Err` because a
//! value is invalid; callers decide whether to surface an outcome verbatim or
//! translate it into their own error type.

pub mod outcome;
pub mod traits;

pub use outcome::{Outcome, Violation};
pub use traits::{Validate, ValidateExt};

/// Common imports for implementing validators.
pub mod prelude {
    pub use super::{Outcome, Validate, ValidateExt, Violation};
}
