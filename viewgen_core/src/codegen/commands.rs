//! Command dispatcher synthesis.

use super::imports::{Import, Imports};
use crate::js::{Expr, Member, Stmt};
use crate::schema::Command;
use tracing::trace;

/// Export name of the command collection.
pub const COMMANDS_EXPORT: &str = "Commands";

/// First parameter of every dispatcher: the target view reference.
pub const TARGET_REF_PARAM: &str = "ref";

/// Builds `export const Commands = {...}` with one dispatcher per command.
/// Returns `None` (and registers nothing) when there are no commands.
pub fn build_commands(commands: &[Command], imports: &mut Imports) -> Option<Stmt> {
    if commands.is_empty() {
        return None;
    }
    imports.add(Import::DispatchCommand);

    let members = commands.iter().map(dispatcher).collect();
    Some(Stmt::ExportConst {
        name: COMMANDS_EXPORT.to_string(),
        init: Expr::Object(members),
    })
}

fn dispatcher(command: &Command) -> Member {
    let param_names: Vec<String> = command.params().iter().map(|param| param.name.clone()).collect();
    trace!(command = %command.name, params = ?param_names, "Emitting command dispatcher");

    let call = Expr::call(
        Import::DispatchCommand.binding(),
        vec![
            Expr::ident(TARGET_REF_PARAM),
            Expr::str(command.name.as_str()),
            Expr::Array(param_names.iter().map(|name| Expr::ident(name.as_str())).collect()),
        ],
    );

    let mut params = Vec::with_capacity(param_names.len() + 1);
    params.push(TARGET_REF_PARAM.to_string());
    params.extend(param_names);

    Member::Method {
        name: command.name.clone(),
        params,
        body: vec![Stmt::Expr(call)],
    }
}
