//! Generate command - writes `<Lib>NativeViewConfig.js` for a schema.

use super::{load_config, resolve_library_name, resolve_output_dir, resolve_schema_path};
use crate::cli::{Cli, GenerateArgs};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use viewgen_core::{
    GenerateOptions, GeneratedFiles, Result, Schema, ViewConfigGenerator, ViewgenError,
};

/// Runs the generate command.
pub fn run(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let config = load_config(cli)?;
    let schema_path = resolve_schema_path(args.schema.as_deref(), &config)?;
    let library = resolve_library_name(args.library.as_deref(), &config, &schema_path)?;
    let output_dir = resolve_output_dir(cli, &config);

    let files = generate_files(&schema_path, &library, config.codegen.generate_options())?;

    if args.check {
        check_files(&output_dir, &files)?;
        info!("{} is up to date", library);
    } else {
        for path in write_files(&output_dir, &files)? {
            info!("View config written to {:?}", path);
        }
    }
    Ok(())
}

/// Reads and generates without touching the output directory.
pub fn generate_files(
    schema_path: &Path,
    library: &str,
    options: GenerateOptions,
) -> Result<GeneratedFiles> {
    info!("Generating view config for {} from {:?}", library, schema_path);
    let schema = Schema::from_path(schema_path).map_err(|e| {
        error!(library = library, error = %e, "Failed to load schema {:?}", schema_path);
        e
    })?;
    ViewConfigGenerator::new(options).generate(library, &schema)
}

/// Writes every generated file under `output_dir`, creating it if needed.
pub fn write_files(output_dir: &Path, files: &GeneratedFiles) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::with_capacity(files.len());
    for (file_name, contents) in files {
        let path = output_dir.join(file_name);
        debug!("Writing {} bytes to {:?}", contents.len(), path);
        fs::write(&path, contents)?;
        written.push(path);
    }
    Ok(written)
}

/// Compares every generated file with the one on disk. A missing or
/// differing file is [`ViewgenError::OutOfDate`].
pub fn check_files(output_dir: &Path, files: &GeneratedFiles) -> Result<()> {
    for (file_name, contents) in files {
        let path = output_dir.join(file_name);
        let on_disk = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                error!("{:?} does not exist", path);
                return Err(ViewgenError::out_of_date(path));
            }
            Err(e) => return Err(e.into()),
        };
        if &on_disk != contents {
            error!("{:?} differs from the generated output", path);
            return Err(ViewgenError::out_of_date(path));
        }
        debug!("{:?} is up to date", path);
    }
    Ok(())
}
