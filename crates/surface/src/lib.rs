//! Declarative assembly of page configuration.
//!
//! A [`Surface`] collects components, options, scripts, styles and a theme,
//! then emits a [`Page`] whose tree a front-end renders. Components are
//! dispatched by name through a per-variant [`ProviderRegistry`] owned by a
//! [`Factory`]. Tables can embed a form surface as their search form.

mod component;
mod defaults;
mod deferred;
mod error;
mod factory;
pub mod form;
pub mod naming;
mod node;
mod page;
mod registry;
pub mod resolver;
mod resources;
mod search;
mod store;
mod surface;
pub mod table;

#[cfg(test)]
mod test_registry;
#[cfg(test)]
mod test_search;
#[cfg(test)]
mod test_surface;

pub use component::{Args, Component, Construct};
pub use deferred::{Deferred, Task};
pub use error::{ArgError, Error, Result};
pub use factory::Factory;
pub use form::Form;
pub use node::ConfigNode;
pub use page::Page;
pub use registry::{FactoryFn, InvokeFn, Provider, ProviderKind, ProviderRegistry};
pub use resolver::Resolved;
pub use resources::{Refs, ResourceKind, Resources};
pub use search::{Embed, Search};
pub use store::{ConfigStore, ConfigStoreExt, EmptyStore, Store};
pub use surface::{Surface, Variant};
pub use table::Table;
