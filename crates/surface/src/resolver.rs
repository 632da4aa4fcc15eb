//! Turning a provider into a value.

use std::any::Any;

use serde_json::Value;
use tracing::trace;

use crate::{Component, ConfigNode, Error, Provider, Result};

/// The outcome of resolving a provider.
#[derive(Debug)]
pub enum Resolved {
    /// A plain value returned by an invocable or bound as a literal.
    Value(Value),
    /// A freshly built component.
    Component(Box<dyn Component>),
}

impl Resolved {
    /// Borrow the plain value, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Component(_) => None,
        }
    }

    /// Take the plain value, if this is one.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Component(_) => None,
        }
    }

    /// Downcast a resolved component to its concrete type.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        match self {
            Self::Component(c) => {
                let any: &dyn Any = c.as_ref();
                any.downcast_ref::<T>()
            }
            Self::Value(_) => None,
        }
    }

    /// Configuration emitted for the result; plain values are wrapped under `value`
    /// unless they are already objects.
    pub fn format(&self) -> ConfigNode {
        match self {
            Self::Component(c) => c.format(),
            Self::Value(Value::Object(map)) => ConfigNode::from(map.clone()),
            Self::Value(v) => ConfigNode::new().with("value", v.clone()),
        }
    }

    /// Convert into an attachable component. Objects become nodes; other
    /// plain values are rejected.
    pub fn into_component(self, name: &str) -> Result<Box<dyn Component>> {
        match self {
            Self::Component(c) => Ok(c),
            Self::Value(Value::Object(map)) => Ok(Box::new(ConfigNode::from(map))),
            Self::Value(_) => Err(Error::NotAComponent {
                name: name.to_string(),
            }),
        }
    }
}

impl From<Value> for Resolved {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Box<dyn Component>> for Resolved {
    fn from(component: Box<dyn Component>) -> Self {
        Self::Component(component)
    }
}

/// Resolve `provider` with `args`.
///
/// Invocables are called and their result (or error) is returned as is.
/// Constructible providers run their factory; argument failures become
/// [`Error::InstantiationFailure`]. Literals are cloned and `args` is ignored.
pub fn resolve(name: &str, provider: &Provider, args: &[Value]) -> Result<Resolved> {
    trace!(component = name, kind = %provider.kind(), args = args.len(), "resolve");
    match provider {
        Provider::Invoke(f) => f(args),
        Provider::Construct(factory) => factory(args).map(Resolved::Component).map_err(|source| {
            Error::InstantiationFailure {
                name: name.to_string(),
                source,
            }
        }),
        Provider::Literal(value) => Ok(Resolved::Value(value.clone())),
    }
}
