//! Minimal JavaScript output model.
//!
//! Generated modules are assembled from these nodes and printed with
//! [`Printer`]. The printer follows one fixed lexical style: single-quoted
//! strings, two-space indentation, multi-line object literals with trailing
//! commas, and a blank line between top-level statements.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Bool(bool),
    Str(String),
    /// Identifier or dotted member path, printed verbatim.
    Ident(String),
    Object(Vec<Member>),
    Array(Vec<Expr>),
    Call { callee: String, args: Vec<Expr> },
    New { callee: String, args: Vec<Expr> },
    Arrow { params: Vec<String>, body: Box<Expr> },
}

impl Expr {
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Prop { key: String, value: Expr },
    Spread(Expr),
    Method {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },
}

impl Member {
    pub fn prop(key: impl Into<String>, value: Expr) -> Self {
        Member::Prop {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let { name: String, init: Expr },
    ExportConst { name: String, init: Expr },
    ExportDefault(Expr),
    Assign { target: String, value: Expr },
    Expr(Expr),
    Throw(Expr),
    /// `alternate` holding a single `If` prints as `else if`.
    If {
        test: Expr,
        consequent: Vec<Stmt>,
        alternate: Option<Vec<Stmt>>,
    },
}

/// Renders a list of top-level statements separated by blank lines.
pub fn print_program(statements: &[Stmt]) -> String {
    let mut printer = Printer::new();
    for (index, statement) in statements.iter().enumerate() {
        if index > 0 {
            printer.out.push('\n');
        }
        printer.print_stmt(statement);
    }
    printer.finish()
}

pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::new();
    printer.expr(expr);
    printer.finish()
}

#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn pad(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    /// Prints one statement on its own line(s), including the trailing newline.
    pub fn print_stmt(&mut self, stmt: &Stmt) {
        self.pad();
        self.stmt_body(stmt);
        self.out.push('\n');
    }

    fn stmt_body(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Let { name, init } => {
                self.out.push_str("let ");
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.expr(init);
                self.out.push(';');
            }
            Stmt::ExportConst { name, init } => {
                self.out.push_str("export const ");
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.expr(init);
                self.out.push(';');
            }
            Stmt::ExportDefault(expr) => {
                self.out.push_str("export default ");
                self.expr(expr);
                self.out.push(';');
            }
            Stmt::Assign { target, value } => {
                self.out.push_str(target);
                self.out.push_str(" = ");
                self.expr(value);
                self.out.push(';');
            }
            Stmt::Expr(expr) => {
                self.expr(expr);
                self.out.push(';');
            }
            Stmt::Throw(expr) => {
                self.out.push_str("throw ");
                self.expr(expr);
                self.out.push(';');
            }
            Stmt::If {
                test,
                consequent,
                alternate,
            } => self.if_chain(test, consequent, alternate.as_deref()),
        }
    }

    fn if_chain(&mut self, test: &Expr, consequent: &[Stmt], alternate: Option<&[Stmt]>) {
        self.out.push_str("if (");
        self.expr(test);
        self.out.push_str(") ");
        self.block(consequent);
        match alternate {
            None => {}
            Some(
                [
                    Stmt::If {
                        test,
                        consequent,
                        alternate,
                    },
                ],
            ) => {
                self.out.push_str(" else ");
                self.if_chain(test, consequent, alternate.as_deref());
            }
            Some(statements) => {
                self.out.push_str(" else ");
                self.block(statements);
            }
        }
    }

    fn block(&mut self, statements: &[Stmt]) {
        self.out.push_str("{\n");
        self.indent += 1;
        for statement in statements {
            self.print_stmt(statement);
        }
        self.indent -= 1;
        self.pad();
        self.out.push('}');
    }

    pub fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Bool(value) => self.out.push_str(if *value { "true" } else { "false" }),
            Expr::Str(value) => self.out.push_str(&quote(value)),
            Expr::Ident(name) => self.out.push_str(name),
            Expr::Object(members) => self.object(members),
            Expr::Array(items) => {
                self.out.push('[');
                self.list(items);
                self.out.push(']');
            }
            Expr::Call { callee, args } => {
                self.out.push_str(callee);
                self.out.push('(');
                self.list(args);
                self.out.push(')');
            }
            Expr::New { callee, args } => {
                self.out.push_str("new ");
                self.out.push_str(callee);
                self.out.push('(');
                self.list(args);
                self.out.push(')');
            }
            Expr::Arrow { params, body } => {
                self.out.push('(');
                self.out.push_str(&params.join(", "));
                self.out.push_str(") => ");
                self.expr(body);
            }
        }
    }

    fn list(&mut self, items: &[Expr]) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.out.push_str(", ");
            }
            self.expr(item);
        }
    }

    fn object(&mut self, members: &[Member]) {
        if members.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        self.indent += 1;
        for member in members {
            self.pad();
            match member {
                Member::Prop { key, value } => {
                    self.out.push_str(&property_key(key));
                    self.out.push_str(": ");
                    self.expr(value);
                }
                Member::Spread(expr) => {
                    self.out.push_str("...");
                    self.expr(expr);
                }
                Member::Method { name, params, body } => {
                    self.out.push_str(&property_key(name));
                    self.out.push('(');
                    self.out.push_str(&params.join(", "));
                    self.out.push_str(") ");
                    self.block(body);
                }
            }
            self.out.push_str(",\n");
        }
        self.indent -= 1;
        self.pad();
        self.out.push('}');
    }
}

/// Single-quoted JavaScript string literal.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Whether `name` can be used bare as an identifier or property key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
        assert_eq!(quote("line\nbreak"), "'line\\nbreak'");
        assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_identifier_detection() {
        assert!(is_identifier("onPress"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("2d"));
        assert!(!is_identifier("aria-label"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_empty_object_is_inline() {
        assert_eq!(print_expr(&Expr::Object(vec![])), "{}");
    }

    #[test]
    fn test_nested_object_with_trailing_commas() {
        let expr = Expr::Object(vec![
            Member::prop("flag", Expr::Bool(true)),
            Member::prop(
                "nested",
                Expr::Object(vec![Member::prop("name", Expr::str("value"))]),
            ),
            Member::prop("aria-label", Expr::Bool(true)),
            Member::Spread(Expr::call("wrap", vec![Expr::Object(vec![])])),
        ]);
        assert_eq!(
            print_expr(&expr),
            "{\n  flag: true,\n  nested: {\n    name: 'value',\n  },\n  'aria-label': true,\n  ...wrap({}),\n}"
        );
    }

    #[test]
    fn test_method_member() {
        let expr = Expr::Object(vec![Member::Method {
            name: "focus".to_string(),
            params: vec!["ref".to_string(), "animated".to_string()],
            body: vec![Stmt::Expr(Expr::call(
                "dispatch",
                vec![Expr::ident("ref"), Expr::Array(vec![Expr::ident("animated")])],
            ))],
        }]);
        assert_eq!(
            print_expr(&expr),
            "{\n  focus(ref, animated) {\n    dispatch(ref, [animated]);\n  },\n}"
        );
    }

    #[test]
    fn test_if_else_chain() {
        let program = print_program(&[Stmt::If {
            test: Expr::ident("a"),
            consequent: vec![Stmt::Assign {
                target: "x".to_string(),
                value: Expr::str("a"),
            }],
            alternate: Some(vec![Stmt::If {
                test: Expr::ident("b"),
                consequent: vec![Stmt::Assign {
                    target: "x".to_string(),
                    value: Expr::str("b"),
                }],
                alternate: Some(vec![Stmt::Throw(Expr::New {
                    callee: "Error".to_string(),
                    args: vec![Expr::str("none")],
                })]),
            }]),
        }]);
        assert_eq!(
            program,
            "if (a) {\n  x = 'a';\n} else if (b) {\n  x = 'b';\n} else {\n  throw new Error('none');\n}\n"
        );
    }

    #[test]
    fn test_program_separates_statements_with_blank_line() {
        let program = print_program(&[
            Stmt::Let {
                name: "name".to_string(),
                init: Expr::str("View"),
            },
            Stmt::ExportDefault(Expr::call(
                "get",
                vec![
                    Expr::ident("name"),
                    Expr::Arrow {
                        params: vec![],
                        body: Box::new(Expr::ident("CONFIG")),
                    },
                ],
            )),
        ]);
        assert_eq!(
            program,
            "let name = 'View';\n\nexport default get(name, () => CONFIG);\n"
        );
    }
}
