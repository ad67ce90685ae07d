//! Converts a parsed [`AstNode`] into a [`Value`] tree, per spec §4.C.
//!
//! A malformed number token (one the grammar accepted as `Long`/`Double`
//! shaped but that doesn't actually parse, e.g. an integer literal that
//! overflows `i64`) becomes a `Value::Error` inline rather than a hard parse
//! failure; only the grammar stage (`parser::parse_program`) can fail the
//! whole read.

use crate::ast::{AstNode, Tag};
use crate::strings::unescape;
use crate::value::{Number, Value};

pub fn read(node: &AstNode) -> Value {
    match node.tag {
        Tag::Long => match node.contents.parse::<i64>() {
            Ok(n) => Value::Number(Number::Int(n)),
            Err(_) => Value::Error(format!("invalid number {}", node.contents)),
        },
        Tag::Double => match node.contents.parse::<f64>() {
            Ok(x) => Value::Number(Number::Float(x)),
            Err(_) => Value::Error(format!("invalid number {}", node.contents)),
        },
        Tag::Symbol => Value::Symbol(node.contents.clone()),
        Tag::String => {
            let inner = &node.contents[1..node.contents.len() - 1];
            Value::Str(unescape(inner))
        }
        Tag::SExpr | Tag::Root => Value::SExpr(node.children.iter().map(read).collect()),
        Tag::QExpr => Value::QExpr(node.children.iter().map(read).collect()),
    }
}
