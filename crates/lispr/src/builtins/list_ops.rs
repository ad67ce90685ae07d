//! `head tail list eval join cons len init`. `head`/`tail`/`join` work on
//! both QExprs and Strings, per spec §4.F.

use super::check_arity;
use crate::environment::EnvRef;
use crate::io::Printer;
use crate::value::{Number, Value};

pub fn head(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("head", &args, 1) {
        return err;
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => Value::Error("Function 'head' passed {}!".to_owned()),
        Value::QExpr(items) => Value::QExpr(vec![items[0].clone()]),
        Value::Str(s) => match s.chars().next() {
            Some(c) => Value::Str(c.to_string()),
            None => Value::Error("Function 'head' passed an empty string!".to_owned()),
        },
        other => Value::Error(format!(
            "Function 'head' passed wrong argument type. Got a {}, expected a q-expression or a string.",
            other.type_name()
        )),
    }
}

pub fn tail(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("tail", &args, 1) {
        return err;
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => Value::Error("Function 'tail' passed {}!".to_owned()),
        Value::QExpr(items) => Value::QExpr(items[1..].to_vec()),
        Value::Str(s) => {
            let mut chars = s.chars();
            chars.next();
            Value::Str(chars.collect())
        }
        other => Value::Error(format!(
            "Function 'tail' passed wrong argument type. Got a {}, expected a q-expression or a string.",
            other.type_name()
        )),
    }
}

pub fn list(args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

pub fn eval(env: &EnvRef, mut args: Vec<Value>, printer: &mut dyn Printer) -> Value {
    if let Some(err) = check_arity("eval", &args, 1) {
        return err;
    }
    match args.remove(0) {
        Value::QExpr(items) => crate::eval::eval(env, Value::SExpr(items), printer),
        other => Value::Error(format!(
            "Function 'eval' passed wrong argument type. Expected argument 0 to be q-expression, received {}.",
            other.type_name()
        )),
    }
}

pub fn join(args: Vec<Value>) -> Value {
    if args.is_empty() {
        return Value::QExpr(Vec::new());
    }
    let first_kind = args[0].type_name();
    if first_kind != "q-expression" && first_kind != "string" {
        return Value::Error(format!(
            "Function 'join' passed wrong argument type. Got a {first_kind}, expected a q-expression or a string."
        ));
    }
    for v in &args[1..] {
        if v.type_name() != first_kind {
            return Value::Error(format!(
                "Function 'join' passed incompatible types. Got a {first_kind} as the first argument and a {}.",
                v.type_name()
            ));
        }
    }
    if first_kind == "q-expression" {
        let mut out = Vec::new();
        for v in args {
            if let Value::QExpr(items) = v {
                out.extend(items);
            }
        }
        Value::QExpr(out)
    } else {
        let mut out = String::new();
        for v in args {
            if let Value::Str(s) = v {
                out.push_str(&s);
            }
        }
        Value::Str(out)
    }
}

pub fn cons(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("cons", &args, 2) {
        return err;
    }
    if !matches!(args[1], Value::QExpr(_)) {
        return Value::Error(format!(
            "Function 'cons' passed wrong argument type. Expected argument 1 to be q-expression, received {}.",
            args[1].type_name()
        ));
    }
    let mut args = args;
    let tail = args.remove(1);
    let head = args.remove(0);
    match tail {
        Value::QExpr(mut items) => {
            items.insert(0, head);
            Value::QExpr(items)
        }
        _ => unreachable!("validated above"),
    }
}

pub fn len(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("len", &args, 1) {
        return err;
    }
    match &args[0] {
        Value::QExpr(items) => Value::Number(Number::Int(items.len() as i64)),
        other => Value::Error(format!(
            "Function 'len' passed wrong argument type. Expected argument 0 to be q-expression, received {}.",
            other.type_name()
        )),
    }
}

pub fn init(args: Vec<Value>) -> Value {
    if let Some(err) = check_arity("init", &args, 1) {
        return err;
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => Value::Error("Function 'init' passed {}!".to_owned()),
        Value::QExpr(items) => {
            let mut items = items.clone();
            items.pop();
            Value::QExpr(items)
        }
        other => Value::Error(format!(
            "Function 'init' passed wrong argument type. Expected argument 0 to be q-expression, received {}.",
            other.type_name()
        )),
    }
}
