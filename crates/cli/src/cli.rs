//! CLI argument definitions for depargs-demo

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use depargs_core::{DefinitionFile, DependentArg, DependentParser, ParserBuilder};
use std::path::Path;

/// Environment variable naming an optional JSON definition file
pub const DEFS_ENV: &str = "DEPARGS_DEFS";

/// Demonstrates dependent arguments: --dependent is only kept when
/// --primary1 or --primary2 is also given, in any order
// Only used through `CommandFactory`; values are read from the Namespace.
#[derive(Parser, Debug)]
#[command(name = "depargs-demo")]
#[command(author, version, about)]
pub struct Cli {
    /// Input file or identifier
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// First prerequisite of --dependent
    #[arg(long)]
    pub primary1: bool,

    /// Second prerequisite of --dependent
    #[arg(long)]
    pub primary2: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Pretty-print the resolved arguments
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn load_definitions(path: &Path) -> Result<DefinitionFile> {
    DefinitionFile::load(path)
        .with_context(|| format!("Failed to load definitions from {}", path.display()))
}

/// Build the demo parser, adding any dependents from `defs`
pub fn build_parser(defs: Option<DefinitionFile>) -> Result<DependentParser> {
    let dependent = DependentArg::new("dependent", ["primary1", "primary2"])?
        .long("dependent")
        .value_name("VALUE")
        .help("Value kept only alongside a prerequisite");

    let extra = match defs {
        Some(defs) => defs
            .into_dependents()
            .context("Invalid dependent argument definition")?,
        None => Vec::new(),
    };

    let parser = ParserBuilder::from_command(Cli::command())
        .dependent(dependent)
        .dependents(extra)
        .build()
        .context("Invalid argument configuration")?;
    Ok(parser)
}
