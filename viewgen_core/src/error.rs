use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewgenError {
    #[error("Received unknown typeAnnotation: \"{annotation}\"")]
    UnknownTypeAnnotation { annotation: String },

    #[error("Invalid extended type: {kind} (knownTypeName: {known_type_name})")]
    InvalidInheritance {
        kind: String,
        known_type_name: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Generated file is out of date: {path}")]
    OutOfDate { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ViewgenError>;

impl ViewgenError {
    pub fn unknown_type_annotation(annotation: impl Into<String>) -> Self {
        ViewgenError::UnknownTypeAnnotation {
            annotation: annotation.into(),
        }
    }

    pub fn invalid_inheritance(kind: impl Into<String>, known_type_name: impl Into<String>) -> Self {
        ViewgenError::InvalidInheritance {
            kind: kind.into(),
            known_type_name: known_type_name.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        ViewgenError::MissingField(field.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        ViewgenError::Config(message.into())
    }

    pub fn out_of_date(path: impl Into<PathBuf>) -> Self {
        ViewgenError::OutOfDate { path: path.into() }
    }
}
