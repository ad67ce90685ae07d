//! The core reduction rule, per spec §4.D: a Symbol resolves through the
//! environment; an SExpr evaluates its children left-to-right, short-circuits
//! on the first Error, then applies the first evaluated child to the rest;
//! everything else (Number, Error, String, Boolean, QExpr, Function) is
//! self-evaluating.

use crate::apply;
use crate::environment::EnvRef;
use crate::io::Printer;
use crate::value::Value;

pub fn eval(env: &EnvRef, value: Value, printer: &mut dyn Printer) -> Value {
    match value {
        Value::Symbol(name) => crate::environment::Environment::get(env, &name),
        Value::SExpr(items) => eval_sexpr(env, items, printer),
        other => other,
    }
}

pub fn eval_sexpr(env: &EnvRef, items: Vec<Value>, printer: &mut dyn Printer) -> Value {
    log::trace!("reducing s-expression with {} children", items.len());
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let v = eval(env, item, printer);
        if v.is_error() {
            return v;
        }
        evaluated.push(v);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.into_iter().next().expect("len checked above");
    }

    let mut evaluated = evaluated;
    let f = evaluated.remove(0);
    let args = evaluated;
    match f {
        Value::Builtin(_) | Value::Function(_) => apply::apply(env, f, args, printer),
        other => Value::Error(format!(
            "S-expression starts with incorrect type. Got {}, expected function.",
            other.type_name()
        )),
    }
}
