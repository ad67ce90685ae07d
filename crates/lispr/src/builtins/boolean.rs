//! `&& || !`. Unlike arithmetic's number-only fold, these require at least
//! two Boolean arguments (one for `!`) and short-circuit on the first value
//! that decides the result.

use super::check_min_arity;
use crate::value::Value;

pub fn and(args: Vec<Value>) -> Value {
    if let Some(err) = check_min_arity("&&", &args, 2) {
        return err;
    }
    if let Some(err) = check_all_bools("&&", &args) {
        return err;
    }
    let all_true = args.into_iter().all(|v| matches!(v, Value::Bool(true)));
    Value::Bool(all_true)
}

pub fn or(args: Vec<Value>) -> Value {
    if let Some(err) = check_min_arity("||", &args, 2) {
        return err;
    }
    if let Some(err) = check_all_bools("||", &args) {
        return err;
    }
    let any_true = args.into_iter().any(|v| matches!(v, Value::Bool(true)));
    Value::Bool(any_true)
}

pub fn not(args: Vec<Value>) -> Value {
    if let Some(err) = super::check_arity("!", &args, 1) {
        return err;
    }
    match args[0] {
        Value::Bool(b) => Value::Bool(!b),
        _ => Value::Error(format!(
            "Function '!' passed wrong argument type. Expected argument 0 to be boolean, received {}.",
            args[0].type_name()
        )),
    }
}

fn check_all_bools(name: &str, args: &[Value]) -> Option<Value> {
    args.iter().enumerate().find_map(|(i, v)| {
        if matches!(v, Value::Bool(_)) {
            None
        } else {
            Some(Value::Error(format!(
                "Function '{name}' passed wrong argument type. Expected argument {i} to be boolean, received {}.",
                v.type_name()
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_is_true_only_when_every_argument_is() {
        assert!(matches!(and(vec![Value::Bool(true), Value::Bool(true)]), Value::Bool(true)));
        assert!(matches!(and(vec![Value::Bool(true), Value::Bool(false)]), Value::Bool(false)));
    }

    #[test]
    fn or_is_true_when_any_argument_is() {
        assert!(matches!(or(vec![Value::Bool(false), Value::Bool(true)]), Value::Bool(true)));
        assert!(matches!(or(vec![Value::Bool(false), Value::Bool(false)]), Value::Bool(false)));
    }

    #[test]
    fn not_negates_a_single_boolean() {
        assert!(matches!(not(vec![Value::Bool(true)]), Value::Bool(false)));
    }

    #[test]
    fn non_boolean_input_is_rejected() {
        assert!(matches!(and(vec![Value::Bool(true), Value::Number(crate::value::Number::Int(1))]), Value::Error(_)));
        assert!(matches!(not(vec![Value::Number(crate::value::Number::Int(1))]), Value::Error(_)));
    }
}
