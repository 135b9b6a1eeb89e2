//! Assembly of one component's generated module.

use super::commands::build_commands;
use super::imports::{Import, Imports};
use super::view_config::build_view_config;
use crate::error::Result;
use crate::js::{Expr, Stmt, print_program};
use crate::schema::Component;
use tracing::debug;

/// Mutable binding holding the name the component is registered under.
pub const NATIVE_COMPONENT_NAME: &str = "nativeComponentName";

/// Export holding the raw descriptor.
pub const INTERNAL_VIEW_CONFIG: &str = "__INTERNAL_VIEW_CONFIG";

/// Statements of the module for `component_name`:
///
/// ```text
/// let nativeComponentName = '<paper name or component name>';
/// <deprecated name guard, when a deprecated name is declared>
/// export const __INTERNAL_VIEW_CONFIG = {...};
/// export default NativeComponentRegistry.get(nativeComponentName, () => __INTERNAL_VIEW_CONFIG);
/// export const Commands = {...};   // only with commands
/// ```
pub fn build_component_module(
    component_name: &str,
    component: &Component,
    imports: &mut Imports,
) -> Result<Vec<Stmt>> {
    let native_name = component.native_component_name(component_name);
    debug!(component_name, native_name, "Building component module");

    let mut statements = vec![Stmt::Let {
        name: NATIVE_COMPONENT_NAME.to_string(),
        init: Expr::str(native_name),
    }];

    if let Some(deprecated_name) = component.deprecated_component_name() {
        imports.add(Import::UIManager);
        statements.push(deprecated_name_guard(component_name, deprecated_name));
    }

    let view_config = build_view_config(native_name, component, imports)?;
    statements.push(Stmt::ExportConst {
        name: INTERNAL_VIEW_CONFIG.to_string(),
        init: view_config.to_expr(),
    });

    // The default export always goes through the registry, whatever the
    // component extends.
    imports.add(Import::NativeComponentRegistry);
    statements.push(Stmt::ExportDefault(Expr::call(
        format!("{}.get", Import::NativeComponentRegistry.binding()),
        vec![
            Expr::ident(NATIVE_COMPONENT_NAME),
            Expr::Arrow {
                params: vec![],
                body: Box::new(Expr::ident(INTERNAL_VIEW_CONFIG)),
            },
        ],
    )));

    if let Some(commands) = build_commands(&component.commands, imports) {
        statements.push(commands);
    }

    Ok(statements)
}

/// Renders [`build_component_module`] to source text.
pub fn render_component_module(
    component_name: &str,
    component: &Component,
    imports: &mut Imports,
) -> Result<String> {
    let statements = build_component_module(component_name, component, imports)?;
    Ok(print_program(&statements))
}

/// Runtime lookup: the component name first, then the deprecated name,
/// failing with both names when neither is registered.
fn deprecated_name_guard(component_name: &str, deprecated_name: &str) -> Stmt {
    let has_config = |name: &str| {
        Expr::call(
            format!("{}.hasViewManagerConfig", Import::UIManager.binding()),
            vec![Expr::str(name)],
        )
    };
    let adopt = |name: &str| Stmt::Assign {
        target: NATIVE_COMPONENT_NAME.to_string(),
        value: Expr::str(name),
    };

    Stmt::If {
        test: has_config(component_name),
        consequent: vec![adopt(component_name)],
        alternate: Some(vec![Stmt::If {
            test: has_config(deprecated_name),
            consequent: vec![adopt(deprecated_name)],
            alternate: Some(vec![Stmt::Throw(Expr::New {
                callee: "Error".to_string(),
                args: vec![Expr::str(format!(
                    "Failed to find native component for either \"{component_name}\" or \"{deprecated_name}\""
                ))],
            })]),
        }]),
    }
}
