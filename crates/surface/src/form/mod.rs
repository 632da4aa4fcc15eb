//! The form surface.
//!
//! Emits `options`, `columns`, and `search`. When a form is embedded as a
//! table's search form, `search` becomes `true`.

mod components;

use crate::{ConfigNode, Provider, ProviderRegistry, Result, Surface, Variant};

pub use components::Field;

/// Field kinds registered by default, each bound to a [`Field`] factory.
const FIELD_KINDS: &[&str] = &["input", "textarea", "number", "select", "switcher", "date"];

/// Form state. Button settings live in the surface options.
#[derive(Debug, Default)]
pub struct Form;

impl Variant for Form {
    const IDENT: &'static str = "Form";

    fn registry(name: &str) -> ProviderRegistry {
        let mut registry = ProviderRegistry::new(name);
        for &kind in FIELD_KINDS {
            registry.register(
                kind,
                Provider::factory(move |args| Field::from_args(kind, args)),
            );
        }
        registry.with("component", Provider::construct::<ConfigNode>())
    }

    fn emit(surface: &mut Surface<Self>, tree: &mut ConfigNode) -> Result<()> {
        tree.set("search", surface.search().is_on());
        Ok(())
    }
}
