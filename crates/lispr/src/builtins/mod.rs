//! The closed set of primitive operations, per spec §4.F.
//!
//! `Builtin` is a zero-sized tag (one variant per primitive name); dispatch
//! happens in `call`. Mirrors the split in the teacher's
//! `crates/monty/src/builtins/mod.rs`: a `strum`-derived enum for the closed
//! set of names, one file per operation family.

mod arithmetic;
mod boolean;
mod compare;
mod control;
mod define;
mod io;
mod list_ops;

pub(crate) use io::load_path;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::environment::{Environment, EnvRef};
use crate::io::Printer;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, EnumIter)]
pub enum Builtin {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Mod,
    #[strum(serialize = "^")]
    Pow,
    #[strum(serialize = "head")]
    Head,
    #[strum(serialize = "tail")]
    Tail,
    #[strum(serialize = "list")]
    List,
    #[strum(serialize = "eval")]
    Eval,
    #[strum(serialize = "join")]
    Join,
    #[strum(serialize = "cons")]
    Cons,
    #[strum(serialize = "len")]
    Len,
    #[strum(serialize = "init")]
    Init,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "def")]
    Def,
    #[strum(serialize = "=")]
    Put,
    #[strum(serialize = "\\")]
    Lambda,
    #[strum(serialize = "print")]
    Print,
    #[strum(serialize = "error")]
    Error,
    #[strum(serialize = "load")]
    Load,
}

impl Builtin {
    pub fn call(self, env: &EnvRef, args: Vec<Value>, printer: &mut dyn Printer) -> Value {
        use Builtin::*;
        match self {
            Add | Sub | Mul | Div | Mod | Pow => arithmetic::call(self, args),
            Head => list_ops::head(args),
            Tail => list_ops::tail(args),
            List => list_ops::list(args),
            Eval => list_ops::eval(env, args, printer),
            Join => list_ops::join(args),
            Cons => list_ops::cons(args),
            Len => list_ops::len(args),
            Init => list_ops::init(args),
            Eq => compare::eq(args),
            Ne => compare::ne(args),
            Lt => compare::lt(args),
            Gt => compare::gt(args),
            Le => compare::le(args),
            Ge => compare::ge(args),
            And => boolean::and(args),
            Or => boolean::or(args),
            Not => boolean::not(args),
            If => control::if_(env, args, printer),
            Def => define::def(env, args),
            Put => define::put(env, args),
            Lambda => define::lambda(args),
            Print => io::print(args, printer),
            Error => io::error(args),
            Load => io::load(env, args, printer),
        }
    }
}

/// Registers every builtin into `env`'s own frame under its primitive name.
pub fn register_all(env: &EnvRef) {
    use strum::IntoEnumIterator;
    for b in Builtin::iter() {
        let name: &'static str = b.into();
        Environment::put_local(env, name, Value::Builtin(b));
    }
}

pub(crate) fn check_arity(name: &str, args: &[Value], expected: usize) -> Option<Value> {
    if args.len() == expected {
        None
    } else {
        Some(Value::Error(format!(
            "Function '{name}' received {} arguments, expects {expected}.",
            args.len()
        )))
    }
}

pub(crate) fn check_min_arity(name: &str, args: &[Value], min: usize) -> Option<Value> {
    if args.len() >= min {
        None
    } else {
        Some(Value::Error(format!(
            "Function '{name}' received {} arguments, expects at least {min}.",
            args.len()
        )))
    }
}
