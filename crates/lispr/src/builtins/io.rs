//! `print error load`: the language's only observable side effects.

use super::check_arity;
use crate::environment::EnvRef;
use crate::io::Printer;
use crate::parser::parse_program;
use crate::reader::read;
use crate::value::Value;

pub fn print(args: Vec<Value>, printer: &mut dyn Printer) -> Value {
    let rendered = args.iter().map(Value::to_string).collect::<Vec<_>>().join(" ");
    printer.print(&rendered);
    printer.print("\n");
    Value::SExpr(Vec::new())
}

pub fn error(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("error", &args, 1) {
        return err;
    }
    match &args[0] {
        Value::Str(s) => Value::Error(s.clone()),
        other => Value::Error(format!(
            "Function 'error' passed wrong argument type. Expected argument 0 to be string, received {}.",
            other.type_name()
        )),
    }
}

pub fn load(env: &EnvRef, args: Vec<Value>, printer: &mut dyn Printer) -> Value {
    if let Some(err) = check_arity("load", &args, 1) {
        return err;
    }
    let path = match &args[0] {
        Value::Str(s) => s.clone(),
        other => {
            return Value::Error(format!(
                "Function 'load' passed wrong argument type. Expected argument 0 to be string, received {}.",
                other.type_name()
            ))
        }
    };
    load_path(env, &path, printer)
}

pub fn load_path(env: &EnvRef, path: &str, printer: &mut dyn Printer) -> Value {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return Value::Error(format!("Could not load library {e}")),
    };
    let ast = match parse_program(&contents) {
        Ok(ast) => ast,
        Err(e) => return Value::Error(format!("Could not load library {e}")),
    };
    for node in &ast.children {
        let result = crate::eval::eval(env, read(node), printer);
        if let Value::Error(e) = result {
            log::warn!("error evaluating expression from {path}: {e}");
            printer.print(&format!("Error: {e}\n"));
        }
    }
    Value::SExpr(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::io::CollectingPrinter;
    use crate::value::Number;

    #[test]
    fn print_writes_space_separated_arguments_and_a_trailing_newline() {
        let mut printer = CollectingPrinter::default();
        print(vec![Value::Number(Number::Int(1)), Value::Symbol("x".to_owned())], &mut printer);
        assert_eq!(printer.output, "1 x\n");
    }

    #[test]
    fn error_wraps_a_string_argument() {
        assert!(matches!(error(vec![Value::Str("boom".to_owned())]), Value::Error(e) if e == "boom"));
    }

    #[test]
    fn error_rejects_non_string_argument() {
        assert!(matches!(error(vec![Value::Number(Number::Int(1))]), Value::Error(_)));
    }

    #[test]
    fn load_reports_a_missing_file_as_an_error_value() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = load(&env, vec![Value::Str("/nonexistent/path.lspr".to_owned())], &mut printer);
        assert!(matches!(result, Value::Error(_)));
    }

    #[test]
    fn load_evaluates_each_top_level_expression_and_prints_errors_without_stopping() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lispr_load_test_{}.lspr", std::process::id()));
        std::fs::write(&path, "(def {x} 1)\n(error \"boom\")\n(def {y} 2)\n").unwrap();

        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        load(&env, vec![Value::Str(path.to_string_lossy().into_owned())], &mut printer);

        assert!(matches!(Environment::get(&env, "x"), Value::Number(Number::Int(1))));
        assert!(matches!(Environment::get(&env, "y"), Value::Number(Number::Int(2))));
        assert!(printer.output.contains("Error: boom"));

        std::fs::remove_file(&path).ok();
    }
}
