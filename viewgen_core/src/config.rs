use crate::codegen::{DEFAULT_FILE_EXTENSION, GenerateOptions};
use crate::error::{Result, ViewgenError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// Name of the configuration file searched for in the working directory and
/// its ancestors.
pub const CONFIG_FILE_NAME: &str = "viewgen.toml";

/// Matches `${VAR_NAME}` and `${VAR_NAME:-default}`.
static ENV_VAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
        .expect("Invalid regex for environment variable substitution")
});

fn default_output_path() -> String {
    "./generated/".to_string()
}

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

/// General configuration for viewgen operations
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Library name used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CodegenConfig {
    /// Directory the generated file is written to
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Extension of the generated file, without the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Schema read when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            file_extension: default_file_extension(),
            schema_path: None,
        }
    }
}

impl CodegenConfig {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::default().with_file_extension(self.file_extension.as_str())
    }
}

/// Root configuration, read from `viewgen.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ViewgenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub codegen: CodegenConfig,
}

impl ViewgenConfig {
    /// Load configuration by searching for `viewgen.toml` in the current
    /// directory and its ancestors.
    pub fn new() -> Result<ViewgenConfig> {
        info!("Loading viewgen configuration");
        let config_path = Self::find_config_file()?;
        Self::from_path(config_path)
    }

    /// Load configuration from an explicit file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<ViewgenConfig> {
        let path = path.as_ref();
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");
        info!("Reading configuration file at: {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            ViewgenError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        Self::from_toml_str(&contents)
    }

    /// Parse configuration text and resolve environment references.
    pub fn from_toml_str(contents: &str) -> Result<ViewgenConfig> {
        let mut config: ViewgenConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            ViewgenError::config(e.to_string())
        })?;

        debug!("Substituting environment variables in configuration");
        config.codegen.output_path = Self::substitute_env_vars(&config.codegen.output_path)?;
        if let Some(schema_path) = &config.codegen.schema_path {
            config.codegen.schema_path = Some(Self::substitute_env_vars(schema_path)?);
        }
        if let Some(library_name) = &config.general.library_name {
            config.general.library_name = Some(Self::substitute_env_vars(library_name)?);
        }

        debug!(
            library_name = ?config.general.library_name,
            output_path = %config.codegen.output_path,
            file_extension = %config.codegen.file_extension,
            "Configuration loaded successfully"
        );
        Ok(config)
    }

    /// Like [`ViewgenConfig::new`], but falls back to defaults when no
    /// configuration file exists. A file that exists but fails to load is
    /// still an error.
    pub fn load_or_default() -> Result<ViewgenConfig> {
        match Self::find_config_file_from(&env::current_dir()?) {
            Some(path) => Self::from_path(path),
            None => {
                debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
                dotenv::dotenv().ok();
                Ok(ViewgenConfig::default())
            }
        }
    }

    /// Searches for `viewgen.toml` starting from the current directory
    /// and traversing up to the root.
    pub fn find_config_file() -> Result<PathBuf> {
        let current_dir = env::current_dir()?;
        debug!("Starting config file search from: {:?}", current_dir);

        Self::find_config_file_from(&current_dir).ok_or_else(|| {
            error!("Configuration file '{}' not found in any parent directory.", CONFIG_FILE_NAME);
            ViewgenError::config(format!(
                "{CONFIG_FILE_NAME} not found in current or any parent directory."
            ))
        })
    }

    pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            let config_path = dir.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            config_path.is_file().then_some(config_path)
        })
    }

    /// Substitute environment variables in config strings.
    /// Supports `${VAR_NAME:-default}` syntax.
    pub fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = String::with_capacity(value.len());
        let mut last_end = 0;

        for cap in ENV_VAR_PATTERN.captures_iter(value) {
            let Some(full_match) = cap.get(0) else {
                continue;
            };
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(ViewgenError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result.push_str(&value[last_end..full_match.start()]);
            result.push_str(&replacement);
            last_end = full_match.end();
        }
        result.push_str(&value[last_end..]);

        Ok(result)
    }
}
