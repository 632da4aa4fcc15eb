//! Search state and the embedding protocol.
//!
//! A table can carry a search form. At emission time the parent marks the
//! child as a search surface, overlays its options, forces its deferred task,
//! pulls in its resources, and nests the child's `options`/`columns` tree under
//! its own `search` slot. Embedding is one level deep: a child that itself
//! embeds a surface is rejected.

use std::fmt;

use tracing::debug;

use crate::{ConfigNode, Error, Resources, Result, Surface, Variant};

/// Operations a parent needs from an embedded search surface.
pub trait Embed: fmt::Debug {
    /// Canonical name of the embedded surface.
    fn surface_name(&self) -> &str;

    /// Switch the surface into search mode.
    fn enter_search_mode(&mut self);

    /// Deep-merge an options overlay.
    fn merge_options(&mut self, overlay: ConfigNode);

    /// Force the pending configuration closure.
    fn run_task(&mut self) -> Result<()>;

    /// Resources to merge into the parent.
    fn embedded_resources(&self) -> &Resources;

    /// Whether this surface itself holds an embedded surface.
    fn has_embedded(&self) -> bool;

    /// Serialized `options` and `columns`.
    fn embedded_tree(&self) -> ConfigNode;
}

/// Search state of a surface.
#[derive(Debug, Default)]
pub enum Search {
    /// No search.
    #[default]
    Off,
    /// Plain flag; for forms this marks search mode.
    Flag(bool),
    /// A surface embedded as the search form.
    Embedded(Box<dyn Embed>),
}

impl Search {
    /// Whether search is enabled in any form.
    pub fn is_on(&self) -> bool {
        match self {
            Self::Off => false,
            Self::Flag(on) => *on,
            Self::Embedded(_) => true,
        }
    }

    /// The embedded surface, if any.
    pub fn embedded(&self) -> Option<&dyn Embed> {
        match self {
            Self::Embedded(child) => Some(child.as_ref()),
            _ => None,
        }
    }
}

impl From<bool> for Search {
    fn from(on: bool) -> Self {
        Self::Flag(on)
    }
}

impl<V: Variant> From<Surface<V>> for Search {
    fn from(surface: Surface<V>) -> Self {
        Self::Embedded(Box::new(surface))
    }
}

/// Embed `child` into a parent whose resources are `parent`.
///
/// The nesting check runs again after the child's task, which may itself set
/// an embedded search.
///
/// Returns the child's nested tree.
pub fn embed(
    parent: &mut Resources,
    child: &mut dyn Embed,
    overlay: &ConfigNode,
) -> Result<ConfigNode> {
    if child.has_embedded() {
        return Err(Error::NestedSearch {
            name: child.surface_name().to_string(),
        });
    }
    child.enter_search_mode();
    child.merge_options(overlay.clone());
    child.run_task()?;
    if child.has_embedded() {
        return Err(Error::NestedSearch {
            name: child.surface_name().to_string(),
        });
    }
    parent.merge(child.embedded_resources());
    debug!(child = child.surface_name(), "search surface embedded");
    Ok(child.embedded_tree())
}
