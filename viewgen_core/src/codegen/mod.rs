//! View configuration code generation.
//!
//! A schema is turned into one JavaScript module per library:
//! - [`type_mapper`] maps prop type annotations to attribute validators
//! - [`events`] normalizes event names and builds registrations
//! - [`commands`] synthesizes the command dispatchers
//! - [`view_config`] assembles a component's descriptor
//! - [`component`] wraps a descriptor into a component module
//! - [`render`] and [`generator`] produce the final file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let schema = viewgen_core::Schema::from_path("schema.json")?;
//! let files = viewgen_core::codegen::generate("MyLib", &schema)?;
//! ```

pub mod commands;
pub mod component;
pub mod events;
pub mod generator;
pub mod imports;
pub mod render;
pub mod type_mapper;
pub mod view_config;

pub use generator::{
    DEFAULT_FILE_EXTENSION, FILE_NAME_SUFFIX, GenerateOptions, GeneratedFiles, ViewConfigGenerator,
    generate,
};
pub use imports::{Import, Imports};
pub use type_mapper::{Differ, Processor, Validator, map_prop_type};
pub use view_config::{ViewConfig, build_view_config};
