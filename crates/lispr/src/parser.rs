//! A `nom` parser-combinator implementation of the grammar from spec §6.1:
//!
//! ```text
//! number  := double | long
//! long    := -?[0-9]+
//! double  := -?[0-9]+[.][0-9]*
//! symbol  := [a-zA-Z0-9_+\-*/\\=<>!&%^|]+
//! string  := "(\\.|[^"])*"
//! comment := ;[^\n\r]*
//! sexpr   := ( <expr>* )
//! qexpr   := { <expr>* }
//! expr    := <number> | <symbol> | <string> | <sexpr> | <qexpr>
//! program := <expr>*
//! ```
//!
//! Comments are trivia: consumed between tokens like whitespace, never
//! materialized as `AstNode`s.

use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit0, digit1, multispace1, none_of};
use nom::combinator::{opt, recognize};
use nom::multi::many0;
use nom::sequence::{delimited, pair, tuple};
use nom::IResult;

use crate::ast::{AstNode, Tag};
use crate::error::ParseError;

fn comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = many0(none_of("\n\r"))(input)?;
    Ok((input, ()))
}

fn trivia(input: &str) -> IResult<&str, ()> {
    let (input, _) = many0(alt((
        nom::combinator::map(multispace1, |_| ()),
        comment,
    )))(input)?;
    Ok((input, ()))
}

fn double_tok(input: &str) -> IResult<&str, AstNode> {
    let (input, text) = recognize(tuple((opt(char('-')), digit1, char('.'), digit0)))(input)?;
    Ok((input, AstNode::leaf(Tag::Double, text.to_owned())))
}

fn long_tok(input: &str) -> IResult<&str, AstNode> {
    let (input, text) = recognize(pair(opt(char('-')), digit1))(input)?;
    Ok((input, AstNode::leaf(Tag::Long, text.to_owned())))
}

fn number_tok(input: &str) -> IResult<&str, AstNode> {
    alt((double_tok, long_tok))(input)
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&%^|".contains(c)
}

fn symbol_tok(input: &str) -> IResult<&str, AstNode> {
    let (input, text) = take_while1(is_symbol_char)(input)?;
    Ok((input, AstNode::leaf(Tag::Symbol, text.to_owned())))
}

fn string_tok(input: &str) -> IResult<&str, AstNode> {
    let (input, text) = recognize(delimited(
        char('"'),
        many0(alt((
            recognize(pair(char('\\'), nom::character::complete::anychar)),
            recognize(none_of("\"")),
        ))),
        char('"'),
    ))(input)?;
    Ok((input, AstNode::leaf(Tag::String, text.to_owned())))
}

fn sexpr(input: &str) -> IResult<&str, AstNode> {
    let (input, _) = char('(')(input)?;
    let (input, children) = many0(expr)(input)?;
    let (input, _) = trivia(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, AstNode::interior(Tag::SExpr, children)))
}

fn qexpr(input: &str) -> IResult<&str, AstNode> {
    let (input, _) = char('{')(input)?;
    let (input, children) = many0(expr)(input)?;
    let (input, _) = trivia(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, AstNode::interior(Tag::QExpr, children)))
}

fn expr(input: &str) -> IResult<&str, AstNode> {
    let (input, _) = trivia(input)?;
    alt((number_tok, string_tok, sexpr, qexpr, symbol_tok))(input)
}

/// Parses a whole program into a `Root` node whose children are its
/// top-level expressions.
pub fn parse_program(source: &str) -> Result<AstNode, ParseError> {
    let (rest, children) = many0(expr)(source).map_err(|e| ParseError::Syntax(e.to_string()))?;
    let (rest, _) = trivia(rest).map_err(|e: nom::Err<nom::error::Error<&str>>| ParseError::Syntax(e.to_string()))?;
    if !rest.is_empty() {
        return Err(ParseError::Syntax(rest.to_owned()));
    }
    Ok(AstNode::interior(Tag::Root, children))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_atoms() {
        let ast = parse_program("1 2.5 -3 foo \"hi\"").unwrap();
        assert_eq!(ast.children.len(), 5);
        assert_eq!(ast.children[0].tag, Tag::Long);
        assert_eq!(ast.children[1].tag, Tag::Double);
        assert_eq!(ast.children[2].tag, Tag::Long);
        assert_eq!(ast.children[2].contents, "-3");
        assert_eq!(ast.children[3].tag, Tag::Symbol);
        assert_eq!(ast.children[4].tag, Tag::String);
    }

    #[test]
    fn parses_nested_sexpr_and_qexpr() {
        let ast = parse_program("(+ 1 {2 3})").unwrap();
        assert_eq!(ast.children.len(), 1);
        let top = &ast.children[0];
        assert_eq!(top.tag, Tag::SExpr);
        assert_eq!(top.children.len(), 2);
        assert_eq!(top.children[1].tag, Tag::QExpr);
    }

    #[test]
    fn skips_comments_between_tokens() {
        let ast = parse_program("; a comment\n(+ 1 2) ; trailing\n").unwrap();
        assert_eq!(ast.children.len(), 1);
    }

    #[test]
    fn rejects_unbalanced_input() {
        assert!(parse_program("(+ 1 2").is_err());
    }
}
