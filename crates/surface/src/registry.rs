//! Name-indexed component providers.

use std::{fmt, rc::Rc, result};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::{ArgError, Component, Construct, Error, Resolved, Result, resolver};

/// Callable provider: receives the dispatch arguments and returns anything resolvable.
pub type InvokeFn = dyn Fn(&[Value]) -> Result<Resolved>;

/// Factory provider: builds a component from the dispatch arguments.
pub type FactoryFn = dyn Fn(&[Value]) -> result::Result<Box<dyn Component>, ArgError>;

/// How a registered name turns into a value.
#[derive(Clone)]
pub enum Provider {
    /// Call a function with the arguments and return its result.
    Invoke(Rc<InvokeFn>),
    /// Build a new component through a factory function.
    Construct(Rc<FactoryFn>),
    /// Return a fixed value, ignoring arguments.
    Literal(Value),
}

impl Provider {
    /// Wrap a function. A receiver/method pair is a closure capturing the receiver.
    pub fn invoke<F, R>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<R> + 'static,
        R: Into<Resolved>,
    {
        Self::Invoke(Rc::new(move |args: &[Value]| f(args).map(Into::into)))
    }

    /// Register a constructible component type.
    pub fn construct<C: Construct>() -> Self {
        Self::factory(C::construct)
    }

    /// Register an arbitrary factory function for a component.
    pub fn factory<F, C>(f: F) -> Self
    where
        F: Fn(&[Value]) -> result::Result<C, ArgError> + 'static,
        C: Component,
    {
        Self::Construct(Rc::new(move |args: &[Value]| {
            f(args).map(|c| Box::new(c) as Box<dyn Component>)
        }))
    }

    /// Bind a fixed value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Which resolution branch this provider takes.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Invoke(_) => ProviderKind::Invoke,
            Self::Construct(_) => ProviderKind::Construct,
            Self::Literal(_) => ProviderKind::Literal,
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            other => f.debug_tuple(other.kind().as_str()).finish_non_exhaustive(),
        }
    }
}

/// Resolution branch of a provider, for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Function call.
    Invoke,
    /// Component factory.
    Construct,
    /// Fixed value.
    Literal,
}

impl ProviderKind {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invoke => "invoke",
            Self::Construct => "construct",
            Self::Literal => "literal",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from component name to provider, scoped to one surface variant.
#[derive(Clone, Debug)]
pub struct ProviderRegistry {
    /// Canonical name of the owning variant, used in errors.
    owner: String,
    /// Providers in registration order.
    providers: IndexMap<String, Provider>,
}

impl ProviderRegistry {
    /// Create an empty registry for the variant called `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            providers: IndexMap::new(),
        }
    }

    /// Canonical name of the owning variant.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Store `provider` under `name`. An existing entry is replaced in place.
    pub fn register(&mut self, name: impl Into<String>, provider: Provider) -> &mut Self {
        let name = name.into();
        debug!(surface = %self.owner, component = %name, kind = %provider.kind(), "register");
        self.providers.insert(name, provider);
        self
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, provider: Provider) -> Self {
        self.register(name, provider);
        self
    }

    /// Look up the provider for `name`.
    pub fn resolve(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// All registered names with their resolution branch, in registration order.
    pub fn list(&self) -> impl Iterator<Item = (&str, ProviderKind)> {
        self.providers
            .iter()
            .map(|(name, provider)| (name.as_str(), provider.kind()))
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Look up `name` and resolve it with `args`.
    pub fn make(&self, name: &str, args: &[Value]) -> Result<Resolved> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| Error::ComponentNotFound {
                surface: self.owner.clone(),
                name: name.to_string(),
            })?;
        resolver::resolve(name, provider, args)
    }
}
