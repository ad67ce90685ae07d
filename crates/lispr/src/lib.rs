//! Evaluator and value model for the Lispr dialect: a tagged value
//! representation, a lexically scoped environment chain, and the closed set
//! of builtin operations, fed by a small `nom`-based reader for the external
//! grammar. See the crate's `SPEC_FULL.md`/`DESIGN.md` for the full design.

mod apply;
mod ast;
mod builtins;
mod environment;
mod error;
mod eval;
mod io;
mod parser;
mod reader;
mod strings;
mod value;

pub use ast::{AstNode, Tag};
pub use builtins::Builtin;
pub use environment::{Environment, EnvRef};
pub use error::ParseError;
pub use eval::eval;
pub use io::{CollectingPrinter, Printer, StdPrinter};
pub use parser::parse_program;
pub use reader::read;
pub use value::{equals, Number, UserFunction, Value};

/// Parses and evaluates every top-level expression in `source` under `env`,
/// in order, printing nothing and returning the last result (or an empty
/// `Value::SExpr` if `source` has no expressions). Used by the REPL for a
/// single line of input.
pub fn eval_source(env: &EnvRef, source: &str, printer: &mut dyn Printer) -> Result<Value, ParseError> {
    let ast = parse_program(source)?;
    let mut last = Value::SExpr(Vec::new());
    for node in &ast.children {
        last = eval(env, read(node), printer);
    }
    Ok(last)
}

/// Loads a file via the `load` builtin's own logic, for use by the CLI
/// before the REPL starts (spec §6.2). Returns whatever `load` itself would
/// return: an empty `Value::SExpr` on success, or a `Value::Error` if the
/// file could not be read or parsed. Per-expression errors within the file
/// are printed (via `printer`) rather than propagated, matching `load`'s own
/// semantics.
pub fn load_file(env: &EnvRef, path: &str, printer: &mut dyn Printer) -> Value {
    builtins::load_path(env, path, printer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_source_evaluates_each_top_level_expression_in_order() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = eval_source(&env, "(def {x} 1) (+ x 41)", &mut printer).unwrap();
        assert!(matches!(result, Value::Number(Number::Int(42))));
    }

    #[test]
    fn eval_source_propagates_a_grammar_parse_error() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        assert!(eval_source(&env, "(+ 1 2", &mut printer).is_err());
    }
}
