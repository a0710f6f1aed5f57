//! Combinators and structural validators
//!
//! - **Logical**: [`all_of`] (AND) and [`any_of`] (OR) over any validators.
//! - **Structural**: [`ObjectValidator`] recurses into named members,
//!   [`ArrayValidator`] into array elements. Both prepend their segment to
//!   the path of a failing child (`field`, `[index]`).
//!
//! Combinators compose freely, including with each other, forming a tree
//! in which every node exclusively owns its children.

mod and;
mod array;
mod object;
mod or;

pub use and::all_of;
pub use array::{ArrayValidator, array_of};
pub use object::{ObjectValidator, object};
pub use or::any_of;

pub(crate) use and::check_all;
pub(crate) use or::check_any;
