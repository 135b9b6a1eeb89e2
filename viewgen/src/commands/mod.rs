//! Command handlers for the viewgen CLI.

pub mod generate;
pub mod info;
pub mod init;
pub mod validate;

use crate::cli::{Cli, Commands};
use convert_case::{Case, Casing};
use std::path::{Path, PathBuf};
use tracing::debug;
use viewgen_core::{Result, ViewgenConfig, ViewgenError};

/// Dispatches the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate(args) => generate::run(cli, args),
        Commands::Validate(args) => validate::run(cli, args),
        Commands::Info(args) => info::run(cli, args),
        Commands::Init(args) => init::run(cli, args),
    }
}

/// Loads the configuration named by `--config`, otherwise searches for
/// `viewgen.toml` and falls back to defaults.
pub fn load_config(cli: &Cli) -> Result<ViewgenConfig> {
    match &cli.config {
        Some(path) => ViewgenConfig::from_path(path),
        None => ViewgenConfig::load_or_default(),
    }
}

/// The schema argument, or `codegen.schema_path` from the config.
pub fn resolve_schema_path(schema: Option<&Path>, config: &ViewgenConfig) -> Result<PathBuf> {
    schema
        .map(Path::to_path_buf)
        .or_else(|| config.codegen.schema_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            ViewgenError::config("No schema given and codegen.schema_path is not set in the configuration")
        })
}

/// Library name: the flag, then `general.library_name`, then the schema file
/// stem in PascalCase.
pub fn resolve_library_name(
    flag: Option<&str>,
    config: &ViewgenConfig,
    schema_path: &Path,
) -> Result<String> {
    if let Some(name) = flag.or(config.general.library_name.as_deref()) {
        return Ok(name.to_string());
    }

    let stem = schema_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.trim_end_matches(".schema"))
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            ViewgenError::config(format!(
                "Cannot derive a library name from {:?}; pass --library",
                schema_path
            ))
        })?;
    let name = stem.to_case(Case::Pascal);
    debug!(schema = ?schema_path, library = %name, "Derived library name from schema file");
    Ok(name)
}

/// Output directory: `--output`, then `codegen.output_path`.
pub fn resolve_output_dir(cli: &Cli, config: &ViewgenConfig) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.codegen.output_path))
}
