//! Command-line interface definitions for the `surface` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

use crate::blueprint::Kind;

/// Command-line interface for the `surface` binary.
#[derive(Parser, Debug)]
#[command(
    name = "surface",
    about = "Assemble page configuration from declarative blueprints",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a page from a blueprint and print its JSON.
    Build(BuildArgs),
    /// List the default components registered for a surface kind.
    Components {
        /// Surface kind to inspect.
        #[arg(value_enum)]
        kind: Kind,
    },
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Blueprint file (`.json` or `.ron`).
    #[arg(value_name = "BLUEPRINT")]
    pub blueprint: PathBuf,

    /// Optional config store (`.json` or `.ron`) consulted for defaults.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Indent the emitted JSON.
    #[arg(long)]
    pub pretty: bool,
}
