//! The surface builder and the variant contract.

use std::{fmt, rc::Rc};

use once_cell::unsync::OnceCell;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::{
    Component, ConfigNode, ConfigStore, Deferred, Embed, Page, ProviderRegistry, Refs,
    ResourceKind, Resolved, Resources, Result, Search, Task, defaults, naming, search,
};

/// A concrete kind of surface (a table, a form, ...).
///
/// The variant supplies its default registry, its initialization, and the
/// slots it adds to the emitted tree. Its value is the variant-specific state
/// carried by the surface.
pub trait Variant: Default + fmt::Debug + 'static {
    /// Type identifier the canonical name is derived from.
    const IDENT: &'static str;

    /// Whether the configuration closure waits for [`Surface::execute`].
    /// When `false` it runs during construction.
    const DELAY: bool = true;

    /// Canonical lowercase/underscore name.
    fn name() -> String {
        naming::snake(Self::IDENT)
    }

    /// Default component registrations.
    fn registry(name: &str) -> ProviderRegistry;

    /// Seed resources and theme for a new surface.
    fn init(surface: &mut Surface<Self>, store: &dyn ConfigStore) {
        defaults::seed(surface, store);
    }

    /// Add variant slots to the emitted tree after `options` and `columns`.
    fn emit(surface: &mut Surface<Self>, tree: &mut ConfigNode) -> Result<()>;
}

/// One emittable unit of page configuration.
pub struct Surface<V: Variant> {
    /// Identifier generated on first access.
    id: OnceCell<String>,
    /// Canonical variant name, fixed at construction.
    name: String,
    /// Component providers shared with other surfaces of the same variant.
    registry: Rc<ProviderRegistry>,
    /// Script and style references.
    resources: Resources,
    /// Theme stylesheet references.
    theme: Vec<String>,
    /// Search flag or embedded search surface.
    search: Search,
    /// Global options (`options` slot).
    options: ConfigNode,
    /// Attached components in display order (`columns` slot).
    columns: Vec<Box<dyn Component>>,
    /// Pending configuration closure.
    task: Deferred<Self>,
    /// Variant-specific state.
    variant: V,
}

impl<V: Variant> Surface<V> {
    /// Construct a surface, seed its defaults, and attach `task`.
    ///
    /// The task runs immediately when the variant does not delay.
    pub fn new(
        registry: Rc<ProviderRegistry>,
        store: &dyn ConfigStore,
        task: Option<Task<Self>>,
    ) -> Result<Self> {
        let mut surface = Self {
            id: OnceCell::new(),
            name: V::name(),
            registry,
            resources: Resources::new(),
            theme: Vec::new(),
            search: Search::Off,
            options: ConfigNode::new(),
            columns: Vec::new(),
            task: Deferred::empty(),
            variant: V::default(),
        };
        V::init(&mut surface, store);
        debug!(surface = %surface.name, delay = V::DELAY, "surface constructed");

        if let Some(task) = task {
            surface.task.set(task);
            if !V::DELAY {
                surface.execute()?;
            }
        }
        Ok(surface)
    }

    /// Stable identifier, generated on first call.
    pub fn id(&self) -> &str {
        self.id.get_or_init(|| format!("z{}", Uuid::new_v4().simple()))
    }

    /// Canonical variant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry this surface dispatches through.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run the pending configuration closure, if any. Later calls do nothing.
    ///
    /// The closure is consumed even when it fails.
    pub fn execute(&mut self) -> Result<&mut Self> {
        if let Some(task) = self.task.take() {
            debug!(surface = %self.name, "executing deferred task");
            task(self)?;
        }
        Ok(self)
    }

    /// Whether a configuration closure is waiting.
    pub fn is_pending(&self) -> bool {
        self.task.is_pending()
    }

    /// Dispatch `name` through the registry without attaching the result.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Resolved> {
        self.registry.make(name, args)
    }

    /// Dispatch `name` and append the result to the columns.
    pub fn attach(&mut self, name: &str, args: &[Value]) -> Result<&mut Self> {
        let component = self.call(name, args)?.into_component(name)?;
        self.columns.push(component);
        Ok(self)
    }

    /// Append an already-built component to the columns.
    pub fn push(&mut self, component: impl Component) -> &mut Self {
        self.columns.push(Box::new(component));
        self
    }

    /// Attached components in display order.
    pub fn columns(&self) -> &[Box<dyn Component>] {
        &self.columns
    }

    /// Formatted columns as a JSON array.
    pub fn columns_value(&self) -> Value {
        Value::Array(self.columns.iter().map(|c| c.format().into()).collect())
    }

    /// Deep-merge `overlay` into the global options.
    pub fn options(&mut self, overlay: ConfigNode) -> &mut Self {
        self.options.merge(overlay);
        self
    }

    /// Current global options.
    pub fn options_node(&self) -> &ConfigNode {
        &self.options
    }

    /// Script and style references.
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Add one or more script references.
    pub fn add_script(&mut self, refs: impl Into<Refs>) -> &mut Self {
        self.resources.add_many(ResourceKind::Script, refs);
        self
    }

    /// Add one or more style references.
    pub fn add_style(&mut self, refs: impl Into<Refs>) -> &mut Self {
        self.resources.add_many(ResourceKind::Style, refs);
        self
    }

    /// Script references in order.
    pub fn script(&self) -> Vec<&str> {
        self.resources.list(ResourceKind::Script)
    }

    /// Style references in order.
    pub fn style(&self) -> Vec<&str> {
        self.resources.list(ResourceKind::Style)
    }

    /// Theme stylesheet references.
    pub fn theme(&self) -> &[String] {
        &self.theme
    }

    /// Set the theme. With `replace` the existing entries are cleared first;
    /// otherwise the new entries are appended.
    pub fn set_theme(&mut self, theme: impl Into<Refs>, replace: bool) -> &mut Self {
        if replace {
            self.theme.clear();
        }
        self.theme.extend(theme.into());
        self
    }

    /// Current search state.
    pub fn search(&self) -> &Search {
        &self.search
    }

    /// Store a search flag or an embedded search surface.
    pub fn set_search(&mut self, search: impl Into<Search>) -> &mut Self {
        self.search = search.into();
        self
    }

    /// Variant-specific state.
    pub fn variant(&self) -> &V {
        &self.variant
    }

    /// Mutable variant-specific state.
    pub fn variant_mut(&mut self) -> &mut V {
        &mut self.variant
    }

    /// Run the embedding protocol against the embedded search surface, if any.
    ///
    /// Returns the nested tree to place under the parent's `search` slot.
    pub fn embed_search(&mut self, overlay: &ConfigNode) -> Result<Option<ConfigNode>> {
        let Search::Embedded(child) = &mut self.search else {
            return Ok(None);
        };
        search::embed(&mut self.resources, child.as_mut(), overlay).map(Some)
    }

    /// `options` and `columns` slots.
    pub(crate) fn base_tree(&self) -> ConfigNode {
        let mut tree = ConfigNode::new();
        tree.nest("options", self.options.clone());
        tree.set("columns", self.columns_value());
        tree
    }

    /// Force the pending task and produce the page handed to rendering.
    ///
    /// Calling this twice does not rerun the task; it re-serializes the
    /// current state.
    pub fn view(&mut self) -> Result<Page> {
        self.execute()?;
        let mut tree = self.base_tree();
        V::emit(self, &mut tree)?;
        debug!(surface = %self.name, slots = tree.len(), "view emitted");
        Ok(Page {
            id: self.id().to_string(),
            name: self.name.clone(),
            theme: self.theme.clone(),
            script: self.script().into_iter().map(String::from).collect(),
            style: self.style().into_iter().map(String::from).collect(),
            tree,
        })
    }
}

impl<V: Variant> Embed for Surface<V> {
    fn surface_name(&self) -> &str {
        &self.name
    }

    fn enter_search_mode(&mut self) {
        self.search = Search::Flag(true);
    }

    fn merge_options(&mut self, overlay: ConfigNode) {
        self.options.merge(overlay);
    }

    fn run_task(&mut self) -> Result<()> {
        self.execute().map(|_| ())
    }

    fn embedded_resources(&self) -> &Resources {
        &self.resources
    }

    fn has_embedded(&self) -> bool {
        self.search.embedded().is_some()
    }

    fn embedded_tree(&self) -> ConfigNode {
        self.base_tree()
    }
}

impl<V: Variant> fmt::Debug for Surface<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("name", &self.name)
            .field("id", &self.id.get())
            .field("resources", &self.resources)
            .field("theme", &self.theme)
            .field("search", &self.search)
            .field("options", &self.options)
            .field("columns", &self.columns.len())
            .field("task", &self.task)
            .field("variant", &self.variant)
            .finish()
    }
}
