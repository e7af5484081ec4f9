//! Error types for json-node.
//!
//! The value model itself never fails: ingestion degrades unknown shapes to
//! `Null` and extraction returns `None`. These errors exist for the text
//! convenience path and as shared vocabulary for decoders built on [`Node`].
//!
//! [`Node`]: crate::Node

use crate::node::Node;
use thiserror::Error;

/// Errors surfaced by json-node and by decoders layered on top of it.
#[derive(Error, Debug)]
pub enum NodeError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A node had a different variant than the decoder required.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A required object key was absent.
    #[error("Missing key: {0}")]
    MissingKey(String),
}

impl NodeError {
    /// Build a [`NodeError::TypeMismatch`] naming the variant of `found`.
    pub fn type_mismatch(expected: &'static str, found: &Node) -> Self {
        NodeError::TypeMismatch {
            expected,
            found: found.kind(),
        }
    }
}

/// Convenience alias used throughout json-node.
pub type Result<T> = std::result::Result<T, NodeError>;
