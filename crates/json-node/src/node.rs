//! The [`Node`] value model and its ingestion from `serde_json::Value`.
//!
//! A `Node` is an immutable tree with five variants. Ingestion is total:
//! shapes with no matching variant (booleans) become [`Node::Null`] instead
//! of failing.
//!
//! # Example
//! ```
//! use json_node::Node;
//! use serde_json::json;
//!
//! let node = Node::parse(&json!([1, "two", {"three": 3}]));
//! assert_eq!(
//!     node.to_string(),
//!     r#"Array([Number(1), String(two), Object({"three": Number(3)})])"#
//! );
//! ```

use crate::error::Result;
use crate::number::Number;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Children of an [`Node::Object`]. Ordered by key so rendering is
/// deterministic; key order carries no meaning for equality.
pub type Object = BTreeMap<String, Node>;

/// One parsed semi-structured datum.
///
/// Equality is structural: same variant and recursively equal payloads.
/// Cross-variant comparisons are always unequal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Object(Object),
    Array(Vec<Node>),
    String(String),
    Number(Number),
    Null,
}

impl Node {
    /// Ingest a dynamic JSON value, recursively.
    ///
    /// Sequences become `Array`, mappings `Object`, strings `String`, numbers
    /// `Number`. Anything else (`null`, booleans) becomes `Null`.
    pub fn parse(value: &Value) -> Node {
        match value {
            Value::Array(items) => Node::Array(items.iter().map(Node::parse).collect()),
            Value::Object(map) => Node::Object(
                map.iter()
                    .map(|(key, child)| (key.clone(), Node::parse(child)))
                    .collect(),
            ),
            Value::String(s) => Node::String(s.clone()),
            Value::Number(n) => Node::Number(n.clone().into()),
            Value::Bool(b) => unrecognized(*b),
            Value::Null => Node::Null,
        }
    }

    /// Parse JSON text with `serde_json`, then ingest the result.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::JsonParse`](crate::NodeError::JsonParse) if the
    /// text is not valid JSON. Valid JSON never fails to ingest.
    pub fn from_json_str(json: &str) -> Result<Node> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Node::from(value))
    }

    /// Name of this node's variant, as used in rendering.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Object(_) => "Object",
            Node::Array(_) => "Array",
            Node::String(_) => "String",
            Node::Number(_) => "Number",
            Node::Null => "Null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Child of an `Object` by key. `None` for other variants or absent keys.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Element of an `Array` by position. `None` for other variants or out of range.
    pub fn index(&self, i: usize) -> Option<&Node> {
        self.as_array().and_then(|items| items.get(i))
    }
}

/// Shapes without a variant degrade to `Null`. This is the only lossy step
/// of ingestion, so it is traced.
fn unrecognized(value: bool) -> Node {
    tracing::trace!(value, "boolean has no node variant, ingesting as Null");
    Node::Null
}

impl From<Value> for Node {
    /// Owning ingestion: same classification as [`Node::parse`], without
    /// cloning strings or keys.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            Value::String(s) => Node::String(s),
            Value::Number(n) => Node::Number(n.into()),
            Value::Bool(b) => unrecognized(b),
            Value::Null => Node::Null,
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
            Node::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::String(s) => Value::String(s),
            Node::Number(n) => Value::Number(n.into()),
            Node::Null => Value::Null,
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        Value::from(node.clone())
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<Number> for Node {
    fn from(n: Number) -> Self {
        Node::Number(n)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Number(i.into())
    }
}

impl From<u64> for Node {
    fn from(u: u64) -> Self {
        Node::Number(u.into())
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Number(i.into())
    }
}

impl From<f64> for Node {
    /// NaN and infinities have no JSON form and become `Null`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Node::Null, Node::Number)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Array(items)
    }
}

impl From<Object> for Node {
    fn from(map: Object) -> Self {
        Node::Object(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Node::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

/// Diagnostic rendering: `String(v)`, `Number(v)`, `Array([..])`,
/// `Object({"k": ..})`, `Null`. Not a serialization format.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::String(s) => write!(f, "String({s})"),
            Node::Number(n) => write!(f, "Number({n})"),
            Node::Array(items) => {
                f.write_str("Array([")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("])")
            }
            Node::Object(map) => {
                f.write_str("Object({")?;
                for (i, (key, child)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {child}")?;
                }
                f.write_str("})")
            }
            Node::Null => f.write_str("Null"),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Object(map) => map.serialize(serializer),
            Node::Array(items) => items.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Number(n) => n.serialize(serializer),
            Node::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    /// Deserializes through `serde_json::Value`, so the same ingestion rules
    /// apply (booleans become `Null`).
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}
