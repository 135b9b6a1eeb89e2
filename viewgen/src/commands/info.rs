//! Info command - displays the modules and components of a schema.

use super::{load_config, resolve_schema_path};
use crate::cli::{Cli, InfoArgs, InfoFormat};
use serde::Serialize;
use viewgen_core::schema::{BubblingType, Module};
use viewgen_core::{Component, Result, Schema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaInfo {
    pub modules: Vec<ModuleInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    /// `None` for modules the generator skips.
    pub components: Option<Vec<ComponentInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    pub name: String,
    pub native_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_name: Option<String>,
    pub props: usize,
    pub bubbling_events: usize,
    pub direct_events: usize,
    pub commands: usize,
}

impl ComponentInfo {
    fn new(name: &str, component: &Component) -> Self {
        let bubbling_events = component
            .events
            .iter()
            .filter(|event| event.bubbling_type == BubblingType::Bubble)
            .count();
        Self {
            name: name.to_string(),
            native_name: component.native_component_name(name).to_string(),
            deprecated_name: component.deprecated_component_name().map(str::to_string),
            props: component.props.len(),
            bubbling_events,
            direct_events: component.events.len() - bubbling_events,
            commands: component.commands.len(),
        }
    }
}

impl SchemaInfo {
    pub fn from_schema(schema: &Schema) -> Self {
        let modules = schema
            .modules
            .iter()
            .map(|(name, module)| ModuleInfo {
                name: name.to_string(),
                components: match module {
                    Module::Component { components } => Some(
                        components
                            .iter()
                            .map(|(name, component)| ComponentInfo::new(name, component))
                            .collect(),
                    ),
                    Module::Other => None,
                },
            })
            .collect();
        Self { modules }
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::from("=== Schema ===\n");
        for module in &self.modules {
            match &module.components {
                None => out.push_str(&format!("\n{} (skipped: not a component module)\n", module.name)),
                Some(components) => {
                    out.push_str(&format!("\n{} ({} components)\n", module.name, components.len()));
                    for component in components {
                        out.push_str(&format!("  {}", component.name));
                        if component.native_name != component.name {
                            out.push_str(&format!(" -> {}", component.native_name));
                        }
                        if let Some(deprecated) = &component.deprecated_name {
                            out.push_str(&format!(" (deprecated: {deprecated})"));
                        }
                        out.push('\n');
                        out.push_str(&format!(
                            "    props: {}, events: {} bubbling / {} direct, commands: {}\n",
                            component.props,
                            component.bubbling_events,
                            component.direct_events,
                            component.commands
                        ));
                    }
                }
            }
        }
        out
    }
}

/// Runs the info command.
pub fn run(cli: &Cli, args: &InfoArgs) -> Result<()> {
    let config = load_config(cli)?;
    let schema_path = resolve_schema_path(args.schema.as_deref(), &config)?;
    let schema = Schema::from_path(&schema_path)?;
    let info = SchemaInfo::from_schema(&schema);

    match args.format {
        InfoFormat::Pretty => print!("{}", info.render_pretty()),
        InfoFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
    }
    Ok(())
}
