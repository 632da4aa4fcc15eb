//! Error types for component dispatch, surface assembly, and store loading.

use std::{
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Convenient result type for surface operations.
pub type Result<T> = result::Result<T, Error>;

/// Argument validation failures raised while constructing a component.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// A required positional argument was not supplied.
    #[error("missing argument {index} ({what})")]
    Missing {
        /// Zero-based argument position.
        index: usize,
        /// Human-readable name of the expected argument.
        what: &'static str,
    },
    /// A positional argument had the wrong JSON type.
    #[error("argument {index} ({what}) must be {expected}")]
    Type {
        /// Zero-based argument position.
        index: usize,
        /// Human-readable name of the expected argument.
        what: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },
    /// The number of arguments is outside the accepted range.
    #[error("expected {min}..={max} arguments, got {got}")]
    Arity {
        /// Minimum accepted arguments.
        min: usize,
        /// Maximum accepted arguments.
        max: usize,
        /// Number of arguments supplied.
        got: usize,
    },
}

/// Errors produced while resolving components or assembling a surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Dispatch against a name absent from the registry.
    #[error("component `{name}` is not registered for `{surface}`")]
    ComponentNotFound {
        /// Canonical name of the surface whose registry was consulted.
        surface: String,
        /// Component name that was requested.
        name: String,
    },
    /// A constructible provider rejected its arguments.
    #[error("component `{name}` could not be instantiated: {source}")]
    InstantiationFailure {
        /// Component name that was requested.
        name: String,
        /// Underlying argument failure.
        #[source]
        source: ArgError,
    },
    /// Argument failure raised by an invocable provider.
    #[error("invalid arguments: {0}")]
    Arguments(#[from] ArgError),
    /// A resolved value cannot be attached as a column.
    #[error("component `{name}` did not resolve to an attachable value")]
    NotAComponent {
        /// Component name that was requested.
        name: String,
    },
    /// A JSON value that had to be an object was something else.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },
    /// The embedded search surface carries its own embedded surface.
    #[error("surface `{name}` already embeds a search surface; nested search is unsupported")]
    NestedSearch {
        /// Canonical name of the offending child surface.
        name: String,
    },
    /// I/O or filesystem read error.
    #[error("{message}")]
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    /// Store or blueprint content could not be parsed.
    #[error("{message}")]
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    /// Serialization of a configuration tree failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Render a human-friendly message that includes the path when one is known.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read {
                path: Some(p),
                message,
            } => format!("Read error at {}: {}", p.display(), message),
            Self::Read { path: None, message } => format!("Read error: {}", message),
            Self::Parse {
                path: Some(p),
                message,
            } => format!("Parse error at {}: {}", p.display(), message),
            Self::Parse { path: None, message } => format!("Parse error: {}", message),
            other => other.to_string(),
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}
