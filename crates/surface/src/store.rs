//! Key/value lookup for per-variant defaults.

use std::{ffi::OsStr, fs, path::Path};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{Error, Result, node::type_name};

/// External configuration consulted when a surface is initialized.
pub trait ConfigStore {
    /// Raw value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<Value>;
}

/// Typed lookups with a fallback.
pub trait ConfigStoreExt: ConfigStore {
    /// Value under `key` deserialized as `T`, or `default` when absent.
    ///
    /// A present value of the wrong shape also yields `default`, with a warning.
    fn configure<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(value) = self.lookup(key) else {
            return default;
        };
        match serde_json::from_value(value) {
            Ok(v) => v,
            Err(err) => {
                warn!(key, error = %err, "ignoring malformed store value");
                default
            }
        }
    }
}

impl<S: ConfigStore + ?Sized> ConfigStoreExt for S {}

/// A store with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStore;

impl ConfigStore for EmptyStore {
    fn lookup(&self, _key: &str) -> Option<Value> {
        None
    }
}

/// In-memory store backed by a JSON object.
///
/// Keys are matched flat first (`"table.style"` as a literal key) and then as
/// a dotted path into nested objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    /// Top-level entries.
    values: Map<String, Value>,
}

impl Store {
    /// Wrap an existing map.
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Parse a JSON object.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| Error::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Parse a RON map.
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let value: Value = ron::from_str(source).map_err(|e| Error::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Load a `.json` or `.ron` file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| Error::Read {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;
        let parsed = match path.extension().and_then(OsStr::to_str) {
            Some("json") => Self::from_json_str(&source),
            Some("ron") => Self::from_ron_str(&source),
            _ => {
                return Err(Error::Read {
                    path: Some(path.to_path_buf()),
                    message: "Unsupported store format (expected .json or .ron)".to_string(),
                });
            }
        };
        let store = parsed.map_err(|e| match e {
            Error::Parse { message, .. } => Error::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), entries = store.values.len(), "store loaded");
        Ok(store)
    }

    /// Require an object at the top level.
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::Parse {
                path: None,
                message: format!("store must be a map, found {}", type_name(&other)),
            }),
        }
    }

    /// Insert or overwrite a top-level entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigStore for Store {
    fn lookup(&self, key: &str) -> Option<Value> {
        if let Some(v) = self.values.get(key) {
            return Some(v.clone());
        }
        let mut parts = key.split('.');
        let mut current = self.values.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current.clone())
    }
}
