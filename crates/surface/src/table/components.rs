//! Table widgets.

use serde_json::Value;

use crate::{ArgError, Args, Component, ConfigNode, Construct};

/// A table column. `kind` selects the cell renderer (`column`, `expand`,
/// `selection`, `switcher`, `writable`, `select`).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Cell renderer.
    kind: &'static str,
    /// Row field displayed in the column.
    prop: String,
    /// Header label.
    label: Option<String>,
    /// Extra renderer properties.
    props: ConfigNode,
}

impl Column {
    /// Create a column of `kind` bound to `prop`.
    pub fn new(kind: &'static str, prop: impl Into<String>, label: Option<String>) -> Self {
        Self {
            kind,
            prop: prop.into(),
            label,
            props: ConfigNode::new(),
        }
    }

    /// Build a column of `kind` from `(prop, label?, props?)`.
    pub fn from_args(kind: &'static str, args: &[Value]) -> Result<Self, ArgError> {
        let args = Args::new(args).arity(1, 3)?;
        let mut column = Self::new(
            kind,
            args.str(0, "prop")?,
            args.opt_str(1, "label")?.map(String::from),
        );
        if args.len() > 2 {
            column.props = args.node(2, "props")?;
        }
        Ok(column)
    }

    /// Set a renderer property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Cell renderer name.
    pub fn kind(&self) -> &str {
        self.kind
    }

    /// Bound row field.
    pub fn field(&self) -> &str {
        &self.prop
    }
}

impl Component for Column {
    fn format(&self) -> ConfigNode {
        let mut node = ConfigNode::new()
            .with("type", self.kind)
            .with("prop", self.prop.as_str());
        if let Some(label) = &self.label {
            node.set("label", label.as_str());
        }
        if !self.props.is_empty() {
            node.nest("props", self.props.clone());
        }
        node
    }
}

/// A row action button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Handler invoked when the button is pressed.
    handler: String,
    /// Icon class.
    icon: Option<String>,
    /// Extra button properties.
    props: ConfigNode,
}

impl Button {
    /// Create a button for `handler`.
    pub fn new(handler: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            handler: handler.into(),
            icon,
            props: ConfigNode::new(),
        }
    }
}

impl Component for Button {
    fn format(&self) -> ConfigNode {
        let mut node = ConfigNode::new()
            .with("type", "button")
            .with("handler", self.handler.as_str());
        if let Some(icon) = &self.icon {
            node.set("icon", icon.as_str());
        }
        if !self.props.is_empty() {
            node.nest("props", self.props.clone());
        }
        node
    }
}

impl Construct for Button {
    fn construct(args: &[Value]) -> Result<Self, ArgError> {
        let args = Args::new(args).arity(1, 3)?;
        let mut button = Self::new(
            args.str(0, "handler")?,
            args.opt_str(1, "icon")?.map(String::from),
        );
        if args.len() > 2 {
            button.props = args.node(2, "props")?;
        }
        Ok(button)
    }
}

/// Pagination settings for a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// Pager properties.
    props: ConfigNode,
}

impl Pagination {
    /// Wrap explicit pager properties.
    pub fn new(props: ConfigNode) -> Self {
        Self { props }
    }

    /// Set a pager property.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.set(key, value);
        self
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(
            ConfigNode::new()
                .with("pageSize", 15)
                .with("layout", "total, sizes, prev, pager, next, jumper"),
        )
    }
}

impl Component for Pagination {
    fn format(&self) -> ConfigNode {
        self.props.clone()
    }
}

/// Header toolbar settings for a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// Header properties.
    props: ConfigNode,
    /// Toolbar buttons.
    buttons: Vec<Button>,
}

impl Header {
    /// Wrap explicit header properties.
    pub fn new(props: ConfigNode) -> Self {
        Self {
            props,
            buttons: Vec::new(),
        }
    }

    /// Append a toolbar button.
    #[must_use]
    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Component for Header {
    fn format(&self) -> ConfigNode {
        let mut node = self.props.clone();
        if !self.buttons.is_empty() {
            let buttons: Vec<Value> = self.buttons.iter().map(|b| b.format().into()).collect();
            node.set("buttons", buttons);
        }
        node
    }
}
