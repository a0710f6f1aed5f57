//! The validator tree
//!
//! [`Validator`] is a closed set of node kinds. Leaves hold a [`Rule`];
//! every other variant owns its children outright, so a tree is finite,
//! acyclic and free of shared mutable state. Once built it can be used from
//! any number of threads without locking.

use crate::combinators::{ArrayValidator, ObjectValidator, check_all, check_any};
use crate::foundation::{Outcome, Validate};
use crate::validators::Rule;
use serde_json::Value;

/// A node in a validation tree.
#[derive(Debug, Clone)]
pub enum Validator {
    /// A single check.
    Leaf(Rule),
    /// Every child must pass; the first failure is returned as-is.
    And(Vec<Validator>),
    /// At least one child must pass; total failure aggregates messages.
    Or(Vec<Validator>),
    /// Named members plus required-member enforcement.
    Object(ObjectValidator),
    /// One validator for every element, with optional size bounds.
    Array(ArrayValidator),
}

impl Validator {
    /// Chains `other` with AND.
    ///
    /// Appends to an existing `And` node rather than nesting a new one; the
    /// result is the same since AND returns the first failure verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use beacon_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = is_integer().and(min_integer(1)).and(max_integer(9));
    /// assert!(matches!(&v, Validator::And(children) if children.len() == 3));
    /// assert_eq!(v.validate(&json!(0)).message(), "Integer < 1");
    /// ```
    pub fn and(self, other: impl Into<Validator>) -> Validator {
        match self {
            Validator::And(mut children) => {
                children.push(other.into());
                Validator::And(children)
            }
            first => Validator::And(vec![first, other.into()]),
        }
    }

    /// Chains `other` with OR.
    ///
    /// Appends to an existing `Or` node, so `a.or(b).or(c)` aggregates all
    /// three messages at one level.
    pub fn or(self, other: impl Into<Validator>) -> Validator {
        match self {
            Validator::Or(mut children) => {
                children.push(other.into());
                Validator::Or(children)
            }
            first => Validator::Or(vec![first, other.into()]),
        }
    }

    /// Number of nodes in this tree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + match self {
            Validator::Leaf(_) => 0,
            Validator::And(children) | Validator::Or(children) => {
                children.iter().map(Validator::node_count).sum()
            }
            Validator::Object(object) => object.members().map(|(_, v)| v.node_count()).sum(),
            Validator::Array(array) => array.element().node_count(),
        }
    }
}

impl Validate for Validator {
    fn validate(&self, value: &Value) -> Outcome {
        match self {
            Validator::Leaf(rule) => rule.validate(value),
            Validator::And(children) => check_all(children, value),
            Validator::Or(children) => check_any(children, value),
            Validator::Object(object) => object.evaluate(value),
            Validator::Array(array) => array.evaluate(value),
        }
    }

    fn name(&self) -> &str {
        match self {
            Validator::Leaf(rule) => rule.name(),
            Validator::And(_) => "and",
            Validator::Or(_) => "or",
            Validator::Object(_) => "object",
            Validator::Array(_) => "array",
        }
    }
}
