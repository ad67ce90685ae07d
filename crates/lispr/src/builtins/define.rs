//! `def = \`: binding names to values (globally or locally) and building
//! user functions. Shared redefinition guard per spec §9 Open Question 1: a
//! name currently resolving to a builtin `Function` in the calling
//! environment's lookup chain cannot be `def`'d or `=`'d over.

use super::check_min_arity;
use crate::environment::{Environment, EnvRef};
use crate::value::{UserFunction, Value};

fn symbols(name: &str, v: &Value) -> Result<Vec<String>, Value> {
    match v {
        Value::QExpr(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Symbol(s) => Ok(s.clone()),
                other => Err(Value::Error(format!(
                    "Function '{name}' cannot define a non-symbol. Got argument {i} as {}.",
                    other.type_name()
                ))),
            })
            .collect(),
        other => Err(Value::Error(format!(
            "Function '{name}' passed wrong argument type. Expected argument 0 to be q-expression, received {}.",
            other.type_name()
        ))),
    }
}

fn check_no_builtin_shadow(env: &EnvRef, names: &[String]) -> Option<Value> {
    for name in names {
        if matches!(Environment::get(env, name), Value::Builtin(_)) {
            return Some(Value::Error("attempting to redefine builtin function.".to_owned()));
        }
    }
    None
}

fn bind(name: &str, env: &EnvRef, args: Vec<Value>, put: fn(&EnvRef, &str, Value)) -> Value {
    if let Some(err) = check_min_arity(name, &args, 1) {
        return err;
    }
    let mut args = args;
    let names_val = args.remove(0);
    let values = args;

    let names = match symbols(name, &names_val) {
        Ok(names) => names,
        Err(e) => return e,
    };
    if names.len() != values.len() {
        return Value::Error(format!(
            "Function '{name}' passed mismatched names and values. Got {} names and {} values.",
            names.len(),
            values.len()
        ));
    }
    if let Some(err) = check_no_builtin_shadow(env, &names) {
        return err;
    }
    for (n, v) in names.into_iter().zip(values) {
        log::debug!("{name} binds '{n}' to {v}");
        put(env, &n, v);
    }
    Value::SExpr(Vec::new())
}

pub fn def(env: &EnvRef, args: Vec<Value>) -> Value {
    bind("def", env, args, Environment::put_global)
}

pub fn put(env: &EnvRef, args: Vec<Value>) -> Value {
    bind("=", env, args, Environment::put_local)
}

pub fn lambda(args: Vec<Value>) -> Value {
    if let Some(err) = super::check_arity("\\", &args, 2) {
        return err;
    }
    let mut args = args;
    let body = args.remove(1);
    let formals = args.remove(0);

    let (formals, body) = match (formals, body) {
        (Value::QExpr(formals), Value::QExpr(body)) => (formals, body),
        (formals, body) => {
            let bad = if !matches!(formals, Value::QExpr(_)) { &formals } else { &body };
            return Value::Error(format!(
                "Function '\\' passed wrong argument type. Expected two q-expressions, received a {}.",
                bad.type_name()
            ));
        }
    };

    if let Some(err) = validate_formals(&formals) {
        return err;
    }

    Value::Function(UserFunction {
        env: Environment::new(),
        formals,
        body,
    })
}

fn validate_formals(formals: &[Value]) -> Option<Value> {
    for (i, f) in formals.iter().enumerate() {
        if !matches!(f, Value::Symbol(_)) {
            return Some(Value::Error(format!(
                "Function '\\' cannot define non-symbol formal. Got argument {i} as {}.",
                f.type_name()
            )));
        }
    }
    let amp_positions: Vec<usize> = formals
        .iter()
        .enumerate()
        .filter_map(|(i, f)| matches!(f, Value::Symbol(s) if s == "&").then_some(i))
        .collect();
    match amp_positions.as_slice() {
        [] => None,
        [pos] if formals.len() >= 2 && *pos == formals.len() - 2 => None,
        _ => Some(Value::Error(
            "Function format invalid. Symbol '&' not followed by single symbol.".to_owned(),
        )),
    }
}
