//! Init command - initializes viewgen.toml configuration.

use crate::cli::{Cli, InitArgs};
use std::fs;
use std::path::Path;
use tracing::{error, info};
use viewgen_core::Result;
use viewgen_core::config::CONFIG_FILE_NAME;

const CONFIG_TEMPLATE: &str = r#"# viewgen Configuration

[general]
# Library name used when --library is not given.
# Defaults to the schema file name in PascalCase.
# library_name = "MyLibrary"

[codegen]
# Output directory for the generated view config file
# Supports ${VAR} and ${VAR:-default}
output_path = "./generated/"

# Extension of the generated file
file_extension = "js"

# Schema used when none is given on the command line
# schema_path = "./schema.json"
"#;

/// Runs the init command.
pub fn run(cli: &Cli, args: &InitArgs) -> Result<()> {
    let config_path = cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE_NAME));
    if write_config(config_path, args.force)? {
        info!("Created {:?}", config_path);
        info!("Next steps:");
        info!("  1. Edit {:?} to configure your project", config_path);
        info!("  2. Run 'viewgen generate <schema.json>' to generate view configs");
    }
    Ok(())
}

/// Writes the configuration template. Returns `false` without touching an
/// existing file unless `force` is set.
pub fn write_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        error!("{:?} already exists. Use --force to overwrite.", path);
        return Ok(false);
    }
    fs::write(path, CONFIG_TEMPLATE)?;
    Ok(true)
}
