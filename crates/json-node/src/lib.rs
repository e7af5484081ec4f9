//! # json-node
//!
//! An immutable, recursive value model for semi-structured (JSON) data.
//!
//! A [`Node`] is one of `Object`, `Array`, `String`, `Number` or `Null`. Trees
//! are built once from an already-parsed `serde_json::Value`, compared
//! structurally, rendered for diagnostics, and queried with a best-effort,
//! type-directed extraction that returns `None` on any shape mismatch.
//!
//! ## Quick start
//!
//! ```rust
//! use json_node::Node;
//!
//! let a = Node::from_json_str(r#"{"a":1,"b":"x"}"#).unwrap();
//! let b = Node::from_json_str(r#"{"b":"x","a":1}"#).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), r#"Object({"a": Number(1), "b": String(x)})"#);
//!
//! let n: Option<i64> = a.get("a").and_then(|n| n.flat_map(|v: i64| Some(v * 2)));
//! assert_eq!(n, Some(2));
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the `Node` type, ingestion, equality and rendering
//! - [`number`] — the numeric scalar
//! - [`extract`] — `flat_map` and the `Extract` trait
//! - [`decode`] — the `Decode` seam for higher-level decoders
//! - [`error`] — error types

pub mod decode;
pub mod error;
pub mod extract;
pub mod node;
pub mod number;

pub use decode::{decode_key, Decode, Decoded};
pub use error::NodeError;
pub use extract::Extract;
pub use node::{Node, Object};
pub use number::Number;
