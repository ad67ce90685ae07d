//! Typed errors for the stages that run before any `Value` exists to carry
//! one: the grammar parser and the file-loading path. Once a program has
//! been read into `Value`s, all further failure is a first-class
//! `Value::Error` (spec §7), not a `Result`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected input near '{0}'")]
    Syntax(String),
}
