//! The tagged value representation every other module operates on.
//!
//! `Value` mirrors the `lval` union from the original C implementation
//! (`examples/original_source/types.h`), but replaces manual
//! allocation/deallocation with ordinary Rust ownership: a `Value` that goes
//! out of scope is simply dropped, and `Clone` produces the independent,
//! structurally-identical copy the language semantics require whenever a
//! value leaves or enters an [`crate::environment::Environment`].

use std::fmt;

use crate::builtins::Builtin;
use crate::environment::{Environment, EnvRef};
use crate::strings::escape;

/// A 64-bit number, tagged by which field is meaningful.
///
/// The tag is preserved rather than normalized away: printing and arithmetic
/// result types both depend on whether a given number is an integer or a
/// double (see the builtins in `crate::builtins::arithmetic`).
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widens to `f64`. Used only where promotion is already unavoidable
    /// (numeric comparisons, `==`/`!=`); arithmetic keeps integers exact
    /// for as long as both operands stay integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// A user-defined function: a captured lexical environment plus formals and
/// body, both stored as the raw children of what was originally a QExpr.
#[derive(Debug)]
pub struct UserFunction {
    /// The environment captured at `\` time, extended with formal bindings
    /// as arguments are applied.
    pub env: EnvRef,
    /// Formal parameter symbols, possibly containing the variadic marker `&`.
    pub formals: Vec<Value>,
    /// The function body, evaluated as an S-expression once every formal is
    /// bound.
    pub body: Vec<Value>,
}

impl Clone for UserFunction {
    /// Deep-clones the captured frame but shares its parent pointer; see
    /// [`Environment::deep_clone`]. This is what makes currying safe: two
    /// partial applications of the same stored function never see each
    /// other's bindings.
    fn clone(&self) -> Self {
        UserFunction {
            env: Environment::deep_clone(&self.env),
            formals: self.formals.clone(),
            body: self.body.clone(),
        }
    }
}

/// The evaluator's value type: numbers, errors, symbols, strings, booleans,
/// the two list containers, and functions (builtin or user-defined).
#[derive(Debug)]
pub enum Value {
    Number(Number),
    Error(String),
    Symbol(String),
    Str(String),
    Bool(bool),
    /// Reduced upon evaluation: children are evaluated left-to-right and the
    /// first is applied to the rest.
    SExpr(Vec<Value>),
    /// Preserved literally upon evaluation; the language's data structure.
    QExpr(Vec<Value>),
    Builtin(Builtin),
    Function(UserFunction),
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Error(s) => Value::Error(s.clone()),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::Str(s) => Value::Str(s.clone()),
            Value::Bool(b) => Value::Bool(*b),
            Value::SExpr(items) => Value::SExpr(items.clone()),
            Value::QExpr(items) => Value::QExpr(items.clone()),
            Value::Builtin(b) => Value::Builtin(*b),
            Value::Function(f) => Value::Function(f.clone()),
        }
    }
}

impl Value {
    /// The name used in type-mismatch error messages, matching `ltype_name`
    /// in `examples/original_source/functions.c`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::SExpr(_) => "s-expression",
            Value::QExpr(_) => "q-expression",
            Value::Builtin(_) | Value::Function(_) => "function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

/// Structural equality, promoting integer/double numbers and ignoring a
/// user function's captured environment (only formals/body are compared).
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Error(x), Value::Error(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::SExpr(x), Value::SExpr(y)) | (Value::QExpr(x), Value::QExpr(y)) => equals_seq(x, y),
        (Value::Builtin(x), Value::Builtin(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => equals_seq(&x.formals, &y.formals) && equals_seq(&x.body, &y.body),
        _ => false,
    }
}

fn equals_seq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(x, y))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(Number::Int(n)) => write!(f, "{n}"),
            Value::Number(Number::Float(x)) => write!(f, "{x:.6}"),
            Value::Error(e) => write!(f, "Error: {e}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Str(s) => write!(f, "\"{}\"", escape(s)),
            Value::Bool(true) => write!(f, "t"),
            Value::Bool(false) => write!(f, "nil"),
            Value::SExpr(items) => write_bracketed(f, items, '(', ')'),
            Value::QExpr(items) => write_bracketed(f, items, '{', '}'),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Function(func) => {
                write!(f, "(\\ ")?;
                write_bracketed(f, &func.formals, '{', '}')?;
                write!(f, " ")?;
                write_bracketed(f, &func.body, '{', '}')?;
                write!(f, ")")
            }
        }
    }
}

fn write_bracketed(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_integers_and_floats_distinctly() {
        assert_eq!(Value::Number(Number::Int(6)).to_string(), "6");
        assert_eq!(Value::Number(Number::Float(1.5)).to_string(), "1.500000");
    }

    #[test]
    fn prints_booleans_as_t_and_nil() {
        assert_eq!(Value::Bool(true).to_string(), "t");
        assert_eq!(Value::Bool(false).to_string(), "nil");
    }

    #[test]
    fn prints_strings_with_escapes() {
        assert_eq!(Value::Str("a\nb".to_owned()).to_string(), "\"a\\nb\"");
    }

    #[test]
    fn equals_promotes_numbers() {
        assert!(equals(&Value::Number(Number::Int(2)), &Value::Number(Number::Float(2.0))));
        assert!(!equals(&Value::Number(Number::Int(2)), &Value::Number(Number::Float(2.5))));
    }

    #[test]
    fn equals_rejects_mismatched_tags() {
        assert!(!equals(&Value::Number(Number::Int(1)), &Value::Symbol("1".to_owned())));
    }

    #[test]
    fn clone_is_structurally_equal_for_every_kind() {
        let values = vec![
            Value::Number(Number::Int(1)),
            Value::Number(Number::Float(1.5)),
            Value::Symbol("x".to_owned()),
            Value::Str("hi".to_owned()),
            Value::Bool(true),
            Value::SExpr(vec![Value::Number(Number::Int(1)), Value::Symbol("y".to_owned())]),
            Value::QExpr(vec![Value::Number(Number::Int(1))]),
            Value::Builtin(Builtin::Add),
        ];
        for v in values {
            assert!(equals(&v, &v.clone()));
        }
    }
}
