//! Command-line entry point: build a function schema and write it as JSON.

use anyhow::Context;
use clap::Parser;
use json_scribe::config::{DEFAULT_OUTPUT_FILE, FunctionDefinition};
use json_scribe::core::DEFAULT_INDENT;
use json_scribe::{generate, init_logging};
use log::info;
use std::path::PathBuf;

/// Command-line options. With no flags the built-in example is written.
#[derive(Parser)]
#[command(name = "json-scribe", version)]
struct Cli {
    /// Optional JSON5 function definition (defaults to the built-in example)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Destination file
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
    /// Spaces per indentation level
    #[arg(long, default_value_t = DEFAULT_INDENT, conflicts_with = "compact")]
    indent: usize,
    /// Write single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    info!(
        "starting json-scribe (input_set={}, output={}, compact={})",
        cli.input.is_some(),
        cli.output.display(),
        cli.compact
    );

    let definition = match &cli.input {
        Some(path) => FunctionDefinition::load_from_path(path)
            .with_context(|| format!("failed to load definition {}", path.display()))?,
        None => FunctionDefinition::example(),
    };
    let indent = if cli.compact { None } else { Some(cli.indent) };

    generate(&definition, &cli.output, indent)?;
    Ok(())
}
