//! Function application, per spec §4.E: builtin dispatch, and the
//! user-function binding algorithm: variadic `&` capture, too-many-argument
//! rejection, and partial application (currying).

use std::collections::VecDeque;

use crate::environment::{Environment, EnvRef};
use crate::io::Printer;
use crate::value::{UserFunction, Value};

pub fn apply(env: &EnvRef, f: Value, args: Vec<Value>, printer: &mut dyn Printer) -> Value {
    match f {
        Value::Builtin(b) => b.call(env, args, printer),
        Value::Function(uf) => apply_user(env, uf, args, printer),
        other => Value::Error(format!(
            "S-expression starts with incorrect type. Got {}, expected function.",
            other.type_name()
        )),
    }
}

fn symbol_name(v: Value) -> String {
    match v {
        Value::Symbol(s) => s,
        _ => unreachable!("formals are validated to be symbols when the lambda was created"),
    }
}

fn apply_user(caller_env: &EnvRef, f: UserFunction, args: Vec<Value>, printer: &mut dyn Printer) -> Value {
    let given = args.len();
    let total = f.formals.len();
    let UserFunction { env: f_env, formals, body } = f;

    let mut formals: VecDeque<Value> = formals.into();
    let mut args: VecDeque<Value> = args.into();

    while !args.is_empty() {
        let Some(sym) = formals.pop_front() else {
            return Value::Error(format!("Function passed too many arguments. Got {given}, expected {total}"));
        };
        let sym_name = symbol_name(sym);

        if sym_name == "&" {
            if formals.len() != 1 {
                return Value::Error("Function format invalid. Symbol '&' not followed by single symbol.".to_owned());
            }
            let rest_name = symbol_name(formals.pop_front().expect("checked above"));
            let rest_args: Vec<Value> = args.drain(..).collect();
            Environment::put_local(&f_env, &rest_name, Value::QExpr(rest_args));
            break;
        }

        let val = args.pop_front().expect("loop guard checked non-empty");
        Environment::put_local(&f_env, &sym_name, val);
    }

    if let Some(Value::Symbol(s)) = formals.front() {
        if s == "&" {
            if formals.len() != 2 {
                return Value::Error("Function format invalid. Symbol '&' not followed by single symbol.".to_owned());
            }
            formals.pop_front();
            let rest_name = symbol_name(formals.pop_front().expect("checked above"));
            Environment::put_local(&f_env, &rest_name, Value::QExpr(Vec::new()));
        }
    }

    if formals.is_empty() {
        Environment::set_parent(&f_env, caller_env.clone());
        crate::eval::eval(&f_env, Value::SExpr(body.into()), printer)
    } else {
        Value::Function(UserFunction {
            env: f_env,
            formals: formals.into(),
            body,
        })
    }
}
