//! Validate command - parses a schema and runs generation without writing.

use super::{load_config, resolve_library_name, resolve_schema_path};
use crate::cli::{Cli, ValidateArgs};
use std::path::Path;
use tracing::{error, info};
use viewgen_core::{GenerateOptions, Result, Schema, ViewConfigGenerator};

/// What a successful validation saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    pub module_count: usize,
    pub component_count: usize,
    pub output_length: usize,
}

/// Runs the validate command.
pub fn run(cli: &Cli, args: &ValidateArgs) -> Result<()> {
    info!("Validating schema");
    let config = load_config(cli)?;
    let schema_path = resolve_schema_path(args.schema.as_deref(), &config)?;
    let library = resolve_library_name(None, &config, &schema_path)?;

    match validate_schema(&schema_path, &library, config.codegen.generate_options()) {
        Ok(summary) => {
            info!("  Schema: OK");
            info!("    Modules: {}", summary.module_count);
            info!("    Components: {}", summary.component_count);
            info!("    Output: {} bytes", summary.output_length);
            info!("Validation passed");
            Ok(())
        }
        Err(e) => {
            error!("  Schema: FAILED");
            error!("    Error: {}", e);
            error!("Validation failed with errors");
            Err(e)
        }
    }
}

pub fn validate_schema(
    schema_path: &Path,
    library: &str,
    options: GenerateOptions,
) -> Result<ValidationSummary> {
    let schema = Schema::from_path(schema_path)?;
    let files = ViewConfigGenerator::new(options).generate(library, &schema)?;
    Ok(ValidationSummary {
        module_count: schema.modules.len(),
        component_count: schema.component_count(),
        output_length: files.values().map(String::len).sum(),
    })
}
