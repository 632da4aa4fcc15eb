//! Form widgets.

use serde_json::Value;

use crate::{ArgError, Args, Component, ConfigNode};

/// A form field. `kind` selects the input widget (`input`, `textarea`,
/// `number`, `select`, `switcher`, `date`).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Input widget.
    kind: &'static str,
    /// Submitted field name.
    field: String,
    /// Label shown next to the widget.
    title: Option<String>,
    /// Initial value.
    value: Value,
    /// Extra widget properties.
    props: ConfigNode,
}

impl Field {
    /// Create a field of `kind` named `field`.
    pub fn new(kind: &'static str, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            title: None,
            value: Value::Null,
            props: ConfigNode::new(),
        }
    }

    /// Build a field of `kind` from `(field, title?, value?, props?)`.
    pub fn from_args(kind: &'static str, args: &[Value]) -> Result<Self, ArgError> {
        let args = Args::new(args).arity(1, 4)?;
        let mut field = Self::new(kind, args.str(0, "field")?);
        field.title = args.opt_str(1, "title")?.map(String::from);
        if let Some(value) = args.value(2) {
            field.value = value.clone();
        }
        if args.len() > 3 {
            field.props = args.node(3, "props")?;
        }
        Ok(field)
    }

    /// Set the label.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Set a widget property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Input widget name.
    pub fn kind(&self) -> &str {
        self.kind
    }

    /// Submitted field name.
    pub fn name(&self) -> &str {
        &self.field
    }
}

impl Component for Field {
    fn format(&self) -> ConfigNode {
        let mut node = ConfigNode::new()
            .with("type", self.kind)
            .with("field", self.field.as_str());
        if let Some(title) = &self.title {
            node.set("title", title.as_str());
        }
        node.set("value", self.value.clone());
        if !self.props.is_empty() {
            node.nest("props", self.props.clone());
        }
        node
    }
}
