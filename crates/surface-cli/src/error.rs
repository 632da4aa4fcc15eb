//! Error handling for the surface CLI.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for CLI operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while assembling a page from the command line.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Errors raised by the assembly engine.
    #[error(transparent)]
    Surface(#[from] surface::Error),
    /// The blueprint file could not be read or parsed.
    #[error("Blueprint error at {}: {message}", path.display())]
    Blueprint {
        /// Blueprint file path.
        path: PathBuf,
        /// Human-readable cause.
        message: String,
    },
    /// A blueprint field was used on a surface kind that does not support it.
    #[error("`{field}` is not supported on {kind} blueprints")]
    Unsupported {
        /// Surface kind of the offending blueprint.
        kind: &'static str,
        /// Field name.
        field: &'static str,
    },
}

impl Error {
    /// Helper to build a blueprint error for `path`.
    pub fn blueprint<M: Into<String>>(path: impl Into<PathBuf>, message: M) -> Self {
        Self::Blueprint {
            path: path.into(),
            message: message.into(),
        }
    }
}
