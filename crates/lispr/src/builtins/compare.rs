//! `== != < > <= >=`. Equality accepts any two values (structural, per
//! `crate::value::equals`); ordering requires two Numbers.

use super::{check_arity, Builtin};
use crate::value::{equals, Value};

pub fn eq(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("==", &args, 2) {
        return err;
    }
    Value::Bool(equals(&args[0], &args[1]))
}

pub fn ne(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("!=", &args, 2) {
        return err;
    }
    Value::Bool(!equals(&args[0], &args[1]))
}

pub fn lt(args: Vec<Value>) -> Value {
    order(Builtin::Lt, args, |a, b| a < b)
}

pub fn gt(args: Vec<Value>) -> Value {
    order(Builtin::Gt, args, |a, b| a > b)
}

pub fn le(args: Vec<Value>) -> Value {
    order(Builtin::Le, args, |a, b| a <= b)
}

pub fn ge(args: Vec<Value>) -> Value {
    order(Builtin::Ge, args, |a, b| a >= b)
}

fn order(op: Builtin, args: Vec<Value>, cmp: fn(f64, f64) -> bool) -> Value {
    let name = op.to_string();
    if let Some(err) = check_arity(&name, &args, 2) {
        return err;
    }
    match (&args[0], &args[1]) {
        (Value::Number(a), Value::Number(b)) => Value::Bool(cmp(a.as_f64(), b.as_f64())),
        (a, b) => Value::Error(format!(
            "Function '{name}' passed wrong argument type. Expected two numbers, received {} and {}.",
            a.type_name(),
            b.type_name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    fn n(i: i64) -> Value {
        Value::Number(Number::Int(i))
    }

    #[test]
    fn eq_compares_structurally() {
        assert!(matches!(eq(vec![n(1), n(1)]), Value::Bool(true)));
        assert!(matches!(eq(vec![n(1), n(2)]), Value::Bool(false)));
    }

    #[test]
    fn ne_is_the_negation_of_eq() {
        assert!(matches!(ne(vec![n(1), n(2)]), Value::Bool(true)));
    }

    #[test]
    fn ordering_promotes_integer_and_double() {
        assert!(matches!(lt(vec![n(1), Value::Number(Number::Float(1.5))]), Value::Bool(true)));
        assert!(matches!(ge(vec![n(2), n(2)]), Value::Bool(true)));
    }

    #[test]
    fn ordering_rejects_non_numbers() {
        assert!(matches!(gt(vec![Value::Symbol("x".to_owned()), n(1)]), Value::Error(_)));
    }
}
