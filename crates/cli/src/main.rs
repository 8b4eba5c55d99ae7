//! depargs-demo - prints the arguments that survive dependency resolution

mod cli;

use anyhow::{Context, Result};
use depargs_core::{Namespace, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cli::DEFS_ENV;

fn main() -> Result<()> {
    let defs = match std::env::var_os(DEFS_ENV).map(PathBuf::from) {
        Some(path) => Some(cli::load_definitions(&path)?),
        None => None,
    };
    let parser = cli::build_parser(defs)?;

    let mut ns = parser.parse();

    // Logging must be up before resolving so discards are reported
    init_tracing(verbosity(&ns));
    ns.resolve();

    let output = if ns.get_flag("pretty") {
        serde_json::to_string_pretty(&ns)
    } else {
        serde_json::to_string(&ns)
    }
    .context("Failed to serialize arguments")?;
    println!("{}", output);

    Ok(())
}

fn verbosity(ns: &Namespace) -> u8 {
    match ns.get("verbose") {
        Some(Value::Count(n)) => *n,
        _ => 0,
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
