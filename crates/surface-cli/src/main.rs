//! Entry point for the `surface` binary.

mod blueprint;
mod cli;
mod error;

use std::process;

use clap::Parser;
use surface::{EmptyStore, Factory, Form, ProviderRegistry, Store, Table};
use tracing::error;

use crate::{
    blueprint::Kind,
    cli::{BuildArgs, Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    logging::init(&log.spec());

    match command {
        Commands::Build(args) => build(&args),
        Commands::Components { kind } => {
            components(kind);
            Ok(())
        }
    }
}

/// Assemble the blueprint and print the page JSON.
fn build(args: &BuildArgs) -> Result<()> {
    let mut factory = match &args.store {
        Some(path) => Factory::new(Store::load(path)?),
        None => Factory::new(EmptyStore),
    };
    let blueprint = blueprint::load(&args.blueprint)?;
    let page = blueprint::render(&blueprint, &mut factory)?;
    let json = if args.pretty {
        page.to_json_pretty()?
    } else {
        page.to_json()?
    };
    println!("{json}");
    Ok(())
}

/// Print the default registry of `kind`, one `name<TAB>provider` per line.
fn components(kind: Kind) {
    let mut factory = Factory::default();
    let registry: &ProviderRegistry = match kind {
        Kind::Table => factory.registry::<Table>(),
        Kind::Form => factory.registry::<Form>(),
    };
    for (name, provider) in registry.list() {
        println!("{name}\t{provider}");
    }
}
