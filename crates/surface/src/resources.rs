//! Ordered, deduplicated script and style references.

use std::{fmt, vec};

use indexmap::IndexSet;
use tracing::trace;

/// Which resource set a reference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Script references.
    Script,
    /// Stylesheet references.
    Style,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Script => "script",
            Self::Style => "style",
        })
    }
}

/// Two insertion-ordered sets of opaque references.
///
/// Membership is exact string equality and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    /// Script references in first-insertion order.
    script: IndexSet<String>,
    /// Style references in first-insertion order.
    style: IndexSet<String>,
}

impl Resources {
    /// Create empty sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set for `kind`.
    fn set(&self, kind: ResourceKind) -> &IndexSet<String> {
        match kind {
            ResourceKind::Script => &self.script,
            ResourceKind::Style => &self.style,
        }
    }

    /// Mutable set for `kind`.
    fn set_mut(&mut self, kind: ResourceKind) -> &mut IndexSet<String> {
        match kind {
            ResourceKind::Script => &mut self.script,
            ResourceKind::Style => &mut self.style,
        }
    }

    /// Append `reference` unless it is already present. Returns whether it was added.
    pub fn add_one(&mut self, kind: ResourceKind, reference: impl Into<String>) -> bool {
        let reference = reference.into();
        let added = self.set_mut(kind).insert(reference);
        if added {
            trace!(%kind, "resource added");
        }
        added
    }

    /// Apply [`add_one`](Self::add_one) to each reference in the caller's order.
    pub fn add_many(&mut self, kind: ResourceKind, refs: impl Into<Refs>) {
        for reference in refs.into() {
            self.add_one(kind, reference);
        }
    }

    /// References of `kind` in first-insertion order.
    pub fn list(&self, kind: ResourceKind) -> Vec<&str> {
        self.set(kind).iter().map(String::as_str).collect()
    }

    /// Whether `reference` is present in the `kind` set.
    pub fn contains(&self, kind: ResourceKind, reference: &str) -> bool {
        self.set(kind).contains(reference)
    }

    /// Number of references of `kind`.
    pub fn len(&self, kind: ResourceKind) -> usize {
        self.set(kind).len()
    }

    /// Whether both sets are empty.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty() && self.style.is_empty()
    }

    /// Append every reference from `other`, keeping this set's entries first.
    pub fn merge(&mut self, other: &Self) {
        for kind in [ResourceKind::Script, ResourceKind::Style] {
            for reference in other.set(kind) {
                self.add_one(kind, reference.as_str());
            }
        }
    }
}

/// One or more references, normalized to a list.
///
/// Accepts a single `&str`/`String` as well as vectors, arrays and slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refs(Vec<String>);

impl Refs {
    /// Borrow the normalized list.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl IntoIterator for Refs {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&str> for Refs {
    fn from(s: &str) -> Self {
        Self(vec![s.to_string()])
    }
}

impl From<String> for Refs {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl<S: Into<String>> From<Vec<S>> for Refs {
    fn from(v: Vec<S>) -> Self {
        Self(v.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Refs {
    fn from(a: [S; N]) -> Self {
        Self(a.into_iter().map(Into::into).collect())
    }
}

impl<S: Clone + Into<String>> From<&[S]> for Refs {
    fn from(s: &[S]) -> Self {
        Self(s.iter().cloned().map(Into::into).collect())
    }
}
