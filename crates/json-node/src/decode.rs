//! The seam used by decoding frameworks built on [`Node`].
//!
//! json-node does not decode user types itself. It defines the [`Decode`]
//! capability, implements the base case (a node decodes to itself), and
//! provides [`decode_key`] so object decoders report missing keys and wrong
//! variants with the same error vocabulary.

use crate::error::NodeError;
use crate::node::Node;

/// Result of decoding a node into `T`.
pub type Decoded<T> = std::result::Result<T, NodeError>;

/// A type that can be built from a [`Node`].
pub trait Decode: Sized {
    fn decode(node: &Node) -> Decoded<Self>;
}

/// Identity: every node decodes successfully to itself.
impl Decode for Node {
    fn decode(node: &Node) -> Decoded<Self> {
        Ok(node.clone())
    }
}

/// Decode the value stored under `key` in an `Object` node.
///
/// # Errors
///
/// - [`NodeError::TypeMismatch`] if `node` is not an `Object`.
/// - [`NodeError::MissingKey`] if the key is absent.
/// - Whatever `T::decode` returns for the child.
pub fn decode_key<T: Decode>(node: &Node, key: &str) -> Decoded<T> {
    let map = node
        .as_object()
        .ok_or_else(|| NodeError::type_mismatch("Object", node))?;
    let child = map
        .get(key)
        .ok_or_else(|| NodeError::MissingKey(key.to_string()))?;
    T::decode(child)
}
