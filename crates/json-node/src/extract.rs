//! Best-effort, type-directed extraction of a node's payload.
//!
//! [`Node::flat_map`] picks the payload for the node's variant, tries to view
//! it as the caller's `T`, and only then applies the caller's function. Any
//! mismatch (including `Null`, which has no payload) yields `None`.
//!
//! # Example
//! ```
//! use json_node::Node;
//!
//! let node = Node::from("42");
//! let parsed = node.flat_map(|s: &str| s.parse::<u32>().ok());
//! assert_eq!(parsed, Some(42));
//!
//! // A string is not a sequence.
//! assert_eq!(node.flat_map(|items: &[Node]| Some(items.len())), None);
//! ```

use crate::node::{Node, Object};
use crate::number::Number;

/// A type that may be viewed out of a node's payload.
///
/// Implementations never panic: a node whose payload cannot be viewed as
/// `Self` produces `None`.
pub trait Extract<'a>: Sized {
    fn extract(node: &'a Node) -> Option<Self>;
}

impl Node {
    /// Try to view this node's payload as `T`, then apply `f`.
    pub fn flat_map<'a, T, U, F>(&'a self, f: F) -> Option<U>
    where
        T: Extract<'a>,
        F: FnOnce(T) -> Option<U>,
    {
        T::extract(self).and_then(f)
    }

    /// Try to view this node's payload as `T`.
    pub fn extract<'a, T: Extract<'a>>(&'a self) -> Option<T> {
        T::extract(self)
    }
}

impl<'a> Extract<'a> for &'a str {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_str()
    }
}

impl<'a> Extract<'a> for &'a Number {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_number()
    }
}

impl<'a> Extract<'a> for &'a [Node] {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_array()
    }
}

impl<'a> Extract<'a> for &'a Object {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_object()
    }
}

impl<'a> Extract<'a> for String {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_str().map(str::to_string)
    }
}

impl<'a> Extract<'a> for Number {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_number().cloned()
    }
}

impl<'a> Extract<'a> for Vec<Node> {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_array().map(<[Node]>::to_vec)
    }
}

impl<'a> Extract<'a> for Object {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_object().cloned()
    }
}

// Numeric views succeed only when the stored value fits the target.

impl<'a> Extract<'a> for i64 {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_number().and_then(Number::as_i64)
    }
}

impl<'a> Extract<'a> for u64 {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_number().and_then(Number::as_u64)
    }
}

impl<'a> Extract<'a> for f64 {
    fn extract(node: &'a Node) -> Option<Self> {
        node.as_number().and_then(Number::as_f64_exact)
    }
}
