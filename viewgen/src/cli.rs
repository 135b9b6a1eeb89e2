//! Command-line interface definitions for viewgen.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// viewgen - native component view configuration generation
#[derive(Parser, Debug)]
#[command(name = "viewgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to viewgen.toml configuration file
    #[arg(short, long, global = true, env = "VIEWGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output directory override (overrides config file)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the view configuration file for a schema
    Generate(GenerateArgs),

    /// Parse a schema and run generation without writing anything
    Validate(ValidateArgs),

    /// Display the modules and components of a schema
    Info(InfoArgs),

    /// Initialize a new viewgen.toml configuration file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Schema JSON file (default: codegen.schema_path from config)
    pub schema: Option<PathBuf>,

    /// Library name (default: general.library_name, then the schema file name)
    #[arg(short, long)]
    pub library: Option<String>,

    /// Fail if the file on disk differs from the generated output; write nothing
    #[arg(long)]
    pub check: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Schema JSON file (default: codegen.schema_path from config)
    pub schema: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Schema JSON file (default: codegen.schema_path from config)
    pub schema: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing viewgen.toml if present
    #[arg(short, long)]
    pub force: bool,
}
