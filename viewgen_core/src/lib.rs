// viewgen - Native component view configuration generation from component schemas

pub mod codegen;
pub mod config;
pub mod error;
pub mod js;
pub mod schema;

// Re-export commonly used items for convenience
pub use codegen::{GenerateOptions, GeneratedFiles, ViewConfigGenerator, generate};
pub use config::ViewgenConfig;
pub use error::{Result, ViewgenError};
pub use schema::{Component, Module, Schema};
