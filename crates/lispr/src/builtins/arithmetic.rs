//! `+ - * / % ^`, with integer/double promotion: an operation between two
//! integers stays an integer; any double operand promotes the whole
//! expression to double. Division and modulo by zero, and non-integer or
//! negative exponents, are errors rather than panics or `inf`/`nan`.

use super::Builtin;
use crate::value::{Number, Value};

pub fn call(op: Builtin, args: Vec<Value>) -> Value {
    if let Some(err) = check_all_numbers(op, &args) {
        return err;
    }
    match op {
        Builtin::Add => fold(&op.to_string(), args, add),
        Builtin::Sub => sub(args),
        Builtin::Mul => fold(&op.to_string(), args, mul),
        Builtin::Div => fold_fallible(&op.to_string(), args, div),
        Builtin::Mod => fold_fallible(&op.to_string(), args, rem),
        Builtin::Pow => fold_fallible(&op.to_string(), args, pow),
        _ => unreachable!("call is only ever invoked for arithmetic builtins"),
    }
}

fn check_all_numbers(op: Builtin, args: &[Value]) -> Option<Value> {
    if args.iter().all(|v| matches!(v, Value::Number(_))) {
        None
    } else {
        Some(Value::Error(format!("'{op}' requires all numerical inputs")))
    }
}

fn number(v: Value) -> Number {
    match v {
        Value::Number(n) => n,
        _ => unreachable!("checked by check_all_numbers"),
    }
}

fn fold(name: &str, args: Vec<Value>, op: fn(Number, Number) -> Number) -> Value {
    let mut iter = args.into_iter().map(number);
    let Some(mut acc) = iter.next() else {
        return Value::Error(format!("Function '{name}' passed 0 arguments, expects at least 1."));
    };
    for n in iter {
        acc = op(acc, n);
    }
    Value::Number(acc)
}

fn fold_fallible(name: &str, args: Vec<Value>, op: fn(Number, Number) -> Result<Number, Value>) -> Value {
    let mut iter = args.into_iter().map(number);
    let Some(mut acc) = iter.next() else {
        return Value::Error(format!("Function '{name}' passed 0 arguments, expects at least 1."));
    };
    for n in iter {
        match op(acc, n) {
            Ok(v) => acc = v,
            Err(e) => return e,
        }
    }
    Value::Number(acc)
}

fn sub(args: Vec<Value>) -> Value {
    let mut iter = args.into_iter().map(number);
    let Some(first) = iter.next() else {
        return Value::Error("Function '-' passed 0 arguments, expects at least 1.".to_owned());
    };
    let rest: Vec<Number> = iter.collect();
    if rest.is_empty() {
        return Value::Number(negate(first));
    }
    let mut acc = first;
    for n in rest {
        acc = subtract(acc, n);
    }
    Value::Number(acc)
}

fn add(x: Number, y: Number) -> Number {
    match (x, y) {
        (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
        (Number::Int(a), Number::Float(b)) => Number::Float(a as f64 + b),
        (Number::Float(a), Number::Int(b)) => Number::Float(a + b as f64),
        (Number::Float(a), Number::Float(b)) => Number::Float(a + b),
    }
}

fn subtract(x: Number, y: Number) -> Number {
    match (x, y) {
        (Number::Int(a), Number::Int(b)) => Number::Int(a - b),
        (Number::Int(a), Number::Float(b)) => Number::Float(a as f64 - b),
        (Number::Float(a), Number::Int(b)) => Number::Float(a - b as f64),
        (Number::Float(a), Number::Float(b)) => Number::Float(a - b),
    }
}

fn mul(x: Number, y: Number) -> Number {
    match (x, y) {
        (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
        (Number::Int(a), Number::Float(b)) => Number::Float(a as f64 * b),
        (Number::Float(a), Number::Int(b)) => Number::Float(a * b as f64),
        (Number::Float(a), Number::Float(b)) => Number::Float(a * b),
    }
}

fn negate(x: Number) -> Number {
    match x {
        Number::Int(a) => Number::Int(-a),
        Number::Float(a) => Number::Float(-a),
    }
}

fn is_zero(n: Number) -> bool {
    match n {
        Number::Int(i) => i == 0,
        Number::Float(f) => f == 0.0,
    }
}

fn div(x: Number, y: Number) -> Result<Number, Value> {
    if is_zero(y) {
        return Err(Value::Error("division by zero".to_owned()));
    }
    Ok(match (x, y) {
        (Number::Int(a), Number::Int(b)) => Number::Int(a / b),
        (Number::Int(a), Number::Float(b)) => Number::Float(a as f64 / b),
        (Number::Float(a), Number::Int(b)) => Number::Float(a / b as f64),
        (Number::Float(a), Number::Float(b)) => Number::Float(a / b),
    })
}

fn rem(x: Number, y: Number) -> Result<Number, Value> {
    if is_zero(y) {
        return Err(Value::Error("division by zero".to_owned()));
    }
    Ok(match (x, y) {
        (Number::Int(a), Number::Int(b)) => Number::Int(a % b),
        (Number::Int(a), Number::Float(b)) => Number::Float(a as f64 % b),
        (Number::Float(a), Number::Int(b)) => Number::Float(a % b as f64),
        (Number::Float(a), Number::Float(b)) => Number::Float(a % b),
    })
}

fn pow(x: Number, y: Number) -> Result<Number, Value> {
    let exponent = match y {
        Number::Float(f) => {
            return Err(Value::Error(format!(
                "exponentiation by a non-integer is not supported. Got {f} as an exponent."
            )))
        }
        Number::Int(i) => i,
    };
    if exponent < 0 {
        return Err(Value::Error(format!(
            "exponentiation by a negative exponent is not supported. Got {exponent} as an exponent."
        )));
    }
    Ok(match x {
        Number::Int(base) => {
            let mut acc = 1i64;
            for _ in 0..exponent {
                acc *= base;
            }
            Number::Int(acc)
        }
        Number::Float(base) => {
            let mut acc = 1.0f64;
            for _ in 0..exponent {
                acc *= base;
            }
            Number::Float(acc)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: i64) -> Value {
        Value::Number(Number::Int(i))
    }
    fn f(x: f64) -> Value {
        Value::Number(Number::Float(x))
    }

    #[test]
    fn add_stays_integer_when_all_inputs_are_integers() {
        assert!(matches!(call(Builtin::Add, vec![n(1), n(2), n(3)]), Value::Number(Number::Int(6))));
    }

    #[test]
    fn mixing_a_double_promotes_the_result() {
        assert!(matches!(call(Builtin::Add, vec![n(1), f(2.5)]), Value::Number(Number::Float(x)) if x == 3.5));
    }

    #[test]
    fn unary_minus_negates() {
        assert!(matches!(call(Builtin::Sub, vec![n(5)]), Value::Number(Number::Int(-5))));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(matches!(call(Builtin::Div, vec![n(1), n(0)]), Value::Error(_)));
    }

    #[test]
    fn pow_rejects_negative_exponents() {
        assert!(matches!(call(Builtin::Pow, vec![n(2), n(-1)]), Value::Error(_)));
    }

    #[test]
    fn pow_computes_integer_powers() {
        assert!(matches!(call(Builtin::Pow, vec![n(2), n(10)]), Value::Number(Number::Int(1024))));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert!(matches!(call(Builtin::Add, vec![n(1), Value::Symbol("x".to_owned())]), Value::Error(_)));
    }
}
