//! The component capability and positional argument helpers.

use std::{any::Any, fmt::Debug};

use serde_json::Value;

use crate::{ArgError, ConfigNode, node::type_name};

/// A unit of configuration that formats itself into a [`ConfigNode`].
///
/// Columns, pagination, headers and form fields all share this capability,
/// so a surface can hold them side by side and serialize them uniformly.
pub trait Component: Any + Debug {
    /// Produce the configuration emitted for this component.
    fn format(&self) -> ConfigNode;
}

/// A component that can be built from positional arguments.
///
/// Registering a type through [`Provider::construct`](crate::Provider::construct)
/// stores `construct` in the registry's factory table.
pub trait Construct: Component + Sized {
    /// Build an instance from dispatch arguments.
    fn construct(args: &[Value]) -> Result<Self, ArgError>;
}

/// Typed accessors over positional dispatch arguments.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a>(&'a [Value]);

impl<'a> Args<'a> {
    /// Wrap a slice of arguments.
    pub fn new(args: &'a [Value]) -> Self {
        Self(args)
    }

    /// Number of arguments supplied.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Require between `min` and `max` arguments, inclusive.
    pub fn arity(self, min: usize, max: usize) -> Result<Self, ArgError> {
        let got = self.0.len();
        if got < min || got > max {
            return Err(ArgError::Arity { min, max, got });
        }
        Ok(self)
    }

    /// Raw argument at `index`, if present.
    pub fn value(&self, index: usize) -> Option<&'a Value> {
        self.0.get(index)
    }

    /// Required string argument.
    pub fn str(&self, index: usize, what: &'static str) -> Result<&'a str, ArgError> {
        match self.0.get(index) {
            None => Err(ArgError::Missing { index, what }),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ArgError::Type {
                index,
                what,
                expected: "a string",
            }),
        }
    }

    /// Optional string argument; `null` counts as absent.
    pub fn opt_str(&self, index: usize, what: &'static str) -> Result<Option<&'a str>, ArgError> {
        match self.0.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.str(index, what).map(Some),
        }
    }

    /// Required object argument, converted to a node.
    pub fn node(&self, index: usize, what: &'static str) -> Result<ConfigNode, ArgError> {
        match self.0.get(index) {
            None => Err(ArgError::Missing { index, what }),
            Some(Value::Object(map)) => Ok(ConfigNode::from(map.clone())),
            Some(_) => Err(ArgError::Type {
                index,
                what,
                expected: "an object",
            }),
        }
    }

    /// JSON type of the argument at `index`, for diagnostics.
    pub fn kind(&self, index: usize) -> Option<&'static str> {
        self.0.get(index).map(type_name)
    }
}
