//! Final file rendering.

use super::imports::Imports;

/// Banner at the top of every generated file.
pub const FILE_HEADER: &str = "/**
 * This code was generated by viewgen.
 *
 * Do not edit this file as changes may cause incorrect behavior and will be lost
 * once the code is regenerated.
 *
 * @flow
 *
 * @generated by viewgen
 */

'use strict';
";

/// Header, then one import statement per line in lexicographic order, then
/// the concatenated component modules.
pub fn render_file(imports: &Imports, body: &str) -> String {
    let statements = imports.statements();

    let mut out = String::with_capacity(FILE_HEADER.len() + body.len() + statements.len() * 96);
    out.push_str(FILE_HEADER);

    if !statements.is_empty() {
        out.push('\n');
        for statement in statements {
            out.push_str(statement);
            out.push('\n');
        }
    }

    let body = body.trim_end_matches('\n');
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
    out
}
