//! Declarative blueprint files and their assembly into pages.
//!
//! A blueprint names a surface kind plus the resources, options, and
//! components to attach. Tables may carry pagination, a header, and a nested
//! search blueprint.

use std::{ffi::OsStr, fs, path::Path, result};

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::{Map, Value};
use surface::{
    ConfigNode, Construct, Factory, Form, Page, Search, Surface, Table, Variant,
    table::{Button, Header, Pagination},
};
use tracing::debug;

use crate::error::{Error, Result};

/// Surface kinds a blueprint can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A data table.
    Table,
    /// An input form.
    Form,
}

impl Kind {
    /// Lowercase kind name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Form => "form",
        }
    }
}

/// One dispatched component: a registered name and its positional arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    /// Registered component name.
    pub component: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Table header: properties plus toolbar buttons given as button arguments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderSpec {
    /// Header properties.
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Button arguments, `(handler, icon?, props?)` each.
    #[serde(default)]
    pub buttons: Vec<Vec<Value>>,
}

/// A surface described as data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Blueprint {
    /// Surface kind.
    pub kind: Kind,
    /// Theme stylesheets; replace the default unless `append_theme` is set.
    #[serde(default)]
    pub theme: Vec<String>,
    /// Append `theme` to the default instead of replacing it.
    #[serde(default)]
    pub append_theme: bool,
    /// Extra script references.
    #[serde(default)]
    pub scripts: Vec<String>,
    /// Extra style references.
    #[serde(default)]
    pub styles: Vec<String>,
    /// Global options overlay.
    #[serde(default)]
    pub options: Map<String, Value>,
    /// Components attached in order.
    #[serde(default)]
    pub columns: Vec<ComponentSpec>,
    /// Pager properties; an empty map selects the default pager. Tables only.
    #[serde(default)]
    pub pagination: Option<Map<String, Value>>,
    /// Toolbar. Tables only.
    #[serde(default)]
    pub header: Option<HeaderSpec>,
    /// Embedded search surface. Tables only.
    #[serde(default)]
    pub search: Option<Box<Self>>,
}

/// Read a `.json` or `.ron` blueprint.
pub fn load(path: &Path) -> Result<Blueprint> {
    let source = fs::read_to_string(path)?;
    let blueprint = match path.extension().and_then(OsStr::to_str) {
        Some("json") => parse_json(&source),
        Some("ron") => parse_ron(&source),
        _ => Err("unsupported blueprint format (expected .json or .ron)".to_string()),
    }
    .map_err(|message| Error::blueprint(path, message))?;
    debug!(path = %path.display(), kind = blueprint.kind.as_str(), "blueprint loaded");
    Ok(blueprint)
}

/// Parse a JSON blueprint.
fn parse_json(source: &str) -> result::Result<Blueprint, String> {
    serde_json::from_str(source).map_err(|e| e.to_string())
}

/// Parse a RON blueprint.
fn parse_ron(source: &str) -> result::Result<Blueprint, String> {
    ron::from_str(source).map_err(|e| e.to_string())
}

/// A surface built from a blueprint, before emission.
#[derive(Debug)]
enum Built {
    /// Table surface.
    Table(Surface<Table>),
    /// Form surface.
    Form(Surface<Form>),
}

impl Built {
    /// Emit the page.
    fn view(&mut self) -> surface::Result<Page> {
        match self {
            Self::Table(t) => t.view(),
            Self::Form(f) => f.view(),
        }
    }

    /// Hand the surface to a parent as its search form.
    fn into_search(self) -> Search {
        match self {
            Self::Table(t) => t.into(),
            Self::Form(f) => f.into(),
        }
    }
}

/// Build the surface described by `blueprint` and emit its page.
pub fn render(blueprint: &Blueprint, factory: &mut Factory) -> Result<Page> {
    Ok(build(blueprint, factory)?.view()?)
}

/// Build a surface; configuration is deferred until emission.
fn build(blueprint: &Blueprint, factory: &mut Factory) -> Result<Built> {
    match blueprint.kind {
        Kind::Table => {
            let search = match &blueprint.search {
                Some(child) => Some(build(child, factory)?.into_search()),
                None => None,
            };
            let bp = blueprint.clone();
            let table = factory.build::<Table, _>(move |t| {
                apply(t, &bp)?;
                apply_table(t, &bp)?;
                if let Some(search) = search {
                    t.set_search(search);
                }
                Ok(())
            })?;
            Ok(Built::Table(table))
        }
        Kind::Form => {
            reject_table_fields(blueprint)?;
            let bp = blueprint.clone();
            let form = factory.build::<Form, _>(move |f| apply(f, &bp))?;
            Ok(Built::Form(form))
        }
    }
}

/// Fail when a form blueprint uses table-only fields.
fn reject_table_fields(blueprint: &Blueprint) -> Result<()> {
    let field = if blueprint.pagination.is_some() {
        "pagination"
    } else if blueprint.header.is_some() {
        "header"
    } else if blueprint.search.is_some() {
        "search"
    } else {
        return Ok(());
    };
    Err(Error::Unsupported {
        kind: blueprint.kind.as_str(),
        field,
    })
}

/// Apply the fields every surface kind understands.
fn apply<V: Variant>(target: &mut Surface<V>, blueprint: &Blueprint) -> surface::Result<()> {
    if !blueprint.theme.is_empty() {
        target.set_theme(blueprint.theme.clone(), !blueprint.append_theme);
    }
    target
        .add_script(blueprint.scripts.clone())
        .add_style(blueprint.styles.clone());
    if !blueprint.options.is_empty() {
        target.options(ConfigNode::from(blueprint.options.clone()));
    }
    for spec in &blueprint.columns {
        target.attach(&spec.component, &spec.args)?;
    }
    Ok(())
}

/// Apply pagination and header.
fn apply_table(table: &mut Surface<Table>, blueprint: &Blueprint) -> surface::Result<()> {
    if let Some(props) = &blueprint.pagination {
        let pagination = if props.is_empty() {
            Pagination::default()
        } else {
            Pagination::new(ConfigNode::from(props.clone()))
        };
        table.variant_mut().set_pagination(pagination);
    }
    if let Some(spec) = &blueprint.header {
        let mut header = Header::new(ConfigNode::from(spec.props.clone()));
        for args in &spec.buttons {
            header = header.button(Button::construct(args)?);
        }
        table.variant_mut().set_header(header);
    }
    Ok(())
}
