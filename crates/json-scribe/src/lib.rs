//! Public SDK surface for json-scribe.
//!
//! This crate re-exports the schema and definition crates and provides the
//! build-then-write helper used by the CLI.

/// Re-export for convenience.
pub use json_scribe_config as config;
/// Re-export for convenience.
pub use json_scribe_core as core;

use anyhow::Context;
use json_scribe_config::FunctionDefinition;
use json_scribe_core::{FunctionSchema, create_function_call_schema, write_json_file};
use log::info;
use std::path::Path;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder()
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    }
}

/// Build the schema for `definition` and write it to `output`.
///
/// Returns the schema list that was written.
pub fn generate(
    definition: &FunctionDefinition,
    output: &Path,
    indent: Option<usize>,
) -> anyhow::Result<Vec<FunctionSchema>> {
    let schema = create_function_call_schema(
        &definition.name,
        &definition.description,
        &definition.parameters,
        &definition.required,
    )
    .with_context(|| format!("failed to build schema for `{}`", definition.name))?;
    write_json_file(&schema, output, indent)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "wrote function schema (name={}, path={})",
        definition.name,
        output.display()
    );
    Ok(schema)
}
