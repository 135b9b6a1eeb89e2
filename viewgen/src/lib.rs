pub use viewgen_core::{codegen, config, error, js, schema};
pub use viewgen_core::{
    Component, GenerateOptions, GeneratedFiles, Module, Result, Schema, ViewConfigGenerator,
    ViewgenConfig, ViewgenError, generate,
};

pub mod cli;
pub mod commands;
