//! `if`: the only builtin that evaluates one of its arguments conditionally
//! rather than receiving all arguments pre-evaluated. The branch not taken is
//! simply never forced into an S-expression; both branches are still type-
//! checked up front, before either is selected.

use super::check_arity;
use crate::environment::EnvRef;
use crate::io::Printer;
use crate::value::Value;

pub fn if_(env: &EnvRef, mut args: Vec<Value>, printer: &mut dyn Printer) -> Value {
    if let Some(err) = check_arity("if", &args, 3) {
        return err;
    }
    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let cond = args.remove(0);

    let cond = match cond {
        Value::Bool(b) => b,
        other => {
            return Value::Error(format!(
                "Function 'if' passed wrong argument type. Expected argument 0 to be boolean, received {}.",
                other.type_name()
            ))
        }
    };
    if !matches!(then_branch, Value::QExpr(_)) {
        return Value::Error(format!(
            "Function 'if' passed wrong argument type. Expected argument 1 to be q-expression, received {}.",
            then_branch.type_name()
        ));
    }
    if !matches!(else_branch, Value::QExpr(_)) {
        return Value::Error(format!(
            "Function 'if' passed wrong argument type. Expected argument 2 to be q-expression, received {}.",
            else_branch.type_name()
        ));
    }

    let branch = if cond { then_branch } else { else_branch };
    match branch {
        Value::QExpr(items) => crate::eval::eval(env, Value::SExpr(items), printer),
        _ => unreachable!("both branches validated above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::io::CollectingPrinter;
    use crate::value::Number;

    fn q(items: Vec<Value>) -> Value {
        Value::QExpr(items)
    }
    fn n(i: i64) -> Value {
        Value::Number(Number::Int(i))
    }

    #[test]
    fn takes_the_then_branch_when_true() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = if_(&env, vec![Value::Bool(true), q(vec![n(1)]), q(vec![n(2)])], &mut printer);
        assert!(matches!(result, Value::Number(Number::Int(1))));
    }

    #[test]
    fn takes_the_else_branch_when_false() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = if_(&env, vec![Value::Bool(false), q(vec![n(1)]), q(vec![n(2)])], &mut printer);
        assert!(matches!(result, Value::Number(Number::Int(2))));
    }

    #[test]
    fn rejects_a_non_boolean_condition() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = if_(&env, vec![n(1), q(vec![]), q(vec![])], &mut printer);
        assert!(matches!(result, Value::Error(_)));
    }

    #[test]
    fn rejects_a_non_qexpr_untaken_branch_even_though_it_is_never_evaluated() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = if_(&env, vec![Value::Bool(true), q(vec![n(1)]), n(5)], &mut printer);
        assert!(matches!(result, Value::Error(_)));
    }

    #[test]
    fn rejects_a_non_qexpr_then_branch() {
        let env = Environment::new_global();
        let mut printer = CollectingPrinter::default();
        let result = if_(&env, vec![Value::Bool(false), n(5), q(vec![n(2)])], &mut printer);
        assert!(matches!(result, Value::Error(_)));
    }
}
