//! The value handed to the rendering layer.

use serde::Serialize;

use crate::{ConfigNode, Result};

/// Merged resources plus the ordered configuration tree of one surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Surface identifier.
    pub id: String,
    /// Canonical variant name.
    pub name: String,
    /// Theme stylesheet references.
    pub theme: Vec<String>,
    /// Script references, parent first then embedded children.
    pub script: Vec<String>,
    /// Style references, parent first then embedded children.
    pub style: Vec<String>,
    /// `options`, `columns`, then variant slots.
    pub tree: ConfigNode,
}

impl Page {
    /// Compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
