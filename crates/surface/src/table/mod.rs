//! The table surface.
//!
//! Emits `options`, `columns`, `pagination`, `header`, and `search` slots. A
//! form set with [`Surface::set_search`] is embedded under `search`.

mod components;

use serde_json::Value;

use crate::{Component, ConfigNode, Provider, ProviderRegistry, Result, Surface, Variant};

pub use components::{Button, Column, Header, Pagination};

/// Column kinds registered by default, each bound to a [`Column`] factory.
const COLUMN_KINDS: &[&str] = &[
    "expand",
    "selection",
    "writable",
    "switcher",
    "select",
    "column",
];

/// Table state: the optional pagination and header sub-objects.
#[derive(Debug, Default)]
pub struct Table {
    /// Pager, emitted under `pagination`.
    pagination: Option<Pagination>,
    /// Toolbar, emitted under `header`.
    header: Option<Header>,
}

impl Table {
    /// Enable pagination.
    pub fn set_pagination(&mut self, pagination: Pagination) -> &mut Self {
        self.pagination = Some(pagination);
        self
    }

    /// Current pagination, if enabled.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Enable the header toolbar.
    pub fn set_header(&mut self, header: Header) -> &mut Self {
        self.header = Some(header);
        self
    }

    /// Current header, if enabled.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }
}

/// Overlay merged into an embedded search form: inline layout and a search icon
/// on the submit button.
pub fn search_overlay() -> ConfigNode {
    let mut submit_prop = ConfigNode::new();
    submit_prop.nest("prop", ConfigNode::new().with("icon", "el-icon-search"));
    let mut submit = ConfigNode::new();
    submit.nest("props", submit_prop);

    let mut overlay = ConfigNode::new();
    overlay.nest("props", ConfigNode::new().with("inline", true));
    overlay.nest("submitBtn", submit);
    overlay
}

/// Formatted sub-object or `null`.
fn slot<C: Component>(component: Option<&C>) -> Value {
    component.map_or(Value::Null, |c| c.format().into())
}

impl Variant for Table {
    const IDENT: &'static str = "Table";

    fn registry(name: &str) -> ProviderRegistry {
        let mut registry = ProviderRegistry::new(name);
        for &kind in COLUMN_KINDS {
            registry.register(
                kind,
                Provider::factory(move |args| Column::from_args(kind, args)),
            );
        }
        registry
            .with("button", Provider::construct::<Button>())
            .with("component", Provider::construct::<ConfigNode>())
    }

    fn emit(surface: &mut Surface<Self>, tree: &mut ConfigNode) -> Result<()> {
        tree.set("pagination", slot(surface.variant().pagination()));
        tree.set("header", slot(surface.variant().header()));
        let search = surface.embed_search(&search_overlay())?;
        tree.set("search", search.map_or(Value::Null, Value::from));
        Ok(())
    }
}
