//! Ordered configuration nodes.

use std::result;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ArgError, Args, Component, Construct, Error, Result};

/// Ordered, serializable property bag forming part of an emitted configuration tree.
///
/// Keys keep their insertion order through merges and serialization, which
/// consumers rely on (column display order, for instance).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigNode(Map<String, Value>);

impl ConfigNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or overwrite `key`. Overwriting keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Nest another node under `key`.
    pub fn nest(&mut self, key: impl Into<String>, node: Self) -> &mut Self {
        self.0.insert(key.into(), Value::Object(node.0));
        self
    }

    /// Look up a direct child value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deep-merge `overlay` into this node.
    ///
    /// Objects merge key by key; any other overlay value replaces the base value.
    pub fn merge(&mut self, overlay: Self) {
        merge_maps(&mut self.0, overlay.0);
    }

    /// Serialize to compact JSON, preserving insertion order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Serialize to indented JSON, preserving insertion order.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

/// Recursively overlay `overlay` onto `base`.
fn merge_maps(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_maps(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// JSON type name used in error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<Map<String, Value>> for ConfigNode {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ConfigNode> for Value {
    fn from(node: ConfigNode) -> Self {
        Self::Object(node.0)
    }
}

impl TryFrom<Value> for ConfigNode {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::NotAnObject {
                found: type_name(&other),
            }),
        }
    }
}

impl Component for ConfigNode {
    fn format(&self) -> ConfigNode {
        self.clone()
    }
}

/// A raw node built from a single object argument.
impl Construct for ConfigNode {
    fn construct(args: &[Value]) -> result::Result<Self, ArgError> {
        Args::new(args).arity(1, 1)?.node(0, "config")
    }
}
