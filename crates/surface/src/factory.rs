//! Explicit owner of registries and the config store.

use std::{collections::HashMap, fmt, rc::Rc};

use serde_json::Value;
use tracing::debug;

use crate::{
    ConfigStore, EmptyStore, Provider, ProviderRegistry, Resolved, Result, Surface, Task, Variant,
};

/// Creates surfaces and holds one registry per variant.
///
/// A variant's registry is seeded from [`Variant::registry`] the first time
/// the factory touches it. Registrations are copy-on-write: surfaces already
/// built keep the registry they were created with, and every later surface
/// sees the new entry.
pub struct Factory {
    /// External store consulted during surface initialization.
    store: Box<dyn ConfigStore>,
    /// Registries keyed by canonical variant name.
    registries: HashMap<String, Rc<ProviderRegistry>>,
}

impl Factory {
    /// Create a factory backed by `store`.
    pub fn new(store: impl ConfigStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            registries: HashMap::new(),
        }
    }

    /// The external config store.
    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    /// Shared handle to the registry for `V`, seeding it on first use.
    fn shared<V: Variant>(&mut self) -> &mut Rc<ProviderRegistry> {
        let name = V::name();
        self.registries.entry(name).or_insert_with_key(|name| {
            debug!(surface = %name, "seeding registry");
            Rc::new(V::registry(name))
        })
    }

    /// Registry for `V`.
    pub fn registry<V: Variant>(&mut self) -> &ProviderRegistry {
        self.shared::<V>()
    }

    /// Add or replace a component for `V`.
    pub fn register<V: Variant>(
        &mut self,
        name: impl Into<String>,
        provider: Provider,
    ) -> &mut Self {
        Rc::make_mut(self.shared::<V>()).register(name, provider);
        self
    }

    /// Type-level dispatch: resolve `name` in `V`'s registry.
    pub fn make<V: Variant>(&mut self, name: &str, args: &[Value]) -> Result<Resolved> {
        self.shared::<V>().make(name, args)
    }

    /// Build a surface without a configuration closure.
    pub fn surface<V: Variant>(&mut self) -> Result<Surface<V>> {
        self.create(None)
    }

    /// Build a surface with a configuration closure.
    pub fn build<V, F>(&mut self, f: F) -> Result<Surface<V>>
    where
        V: Variant,
        F: FnOnce(&mut Surface<V>) -> Result<()> + 'static,
    {
        let task: Task<Surface<V>> = Box::new(f);
        self.create(Some(task))
    }

    /// Shared construction path.
    fn create<V: Variant>(&mut self, task: Option<Task<Surface<V>>>) -> Result<Surface<V>> {
        let registry = Rc::clone(self.shared::<V>());
        Surface::new(registry, self.store.as_ref(), task)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(EmptyStore)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("registries", &self.registries.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
