use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_expression, core::ParseResult},
    },
};

/// Parses a factor, the tightest-binding grammar unit.
///
/// The rule is: `factor := ["-"] (<number> | <variable>) | "(" expression ")"`
///
/// A `-` sign is recognized only directly in front of a number or variable
/// token: a signed number folds into a negative literal, and a signed
/// variable becomes a negated lookup. This is deliberately not a general
/// unary production — `-(...)` does not parse, and `PRINT -x` is not a valid
/// output command.
///
/// # Parameters
/// - `tokens`: Token iterator over the lexed line.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// - [`ParseError::ExpectedClosingParen`] when a `(` group is not closed.
/// - [`ParseError::UnexpectedEndOfLine`] when the line ends where a factor
///   was required.
/// - [`ParseError::InvalidCommand`] for any other token in factor position.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token::Minus) => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            match lookahead.peek() {
                Some(Token::Number(text)) => {
                    let value = number_literal(text, true);
                    tokens.next();
                    tokens.next();
                    Ok(Expr::Literal { value })
                },
                Some(Token::Identifier(name)) => {
                    let name = name.clone();
                    tokens.next();
                    tokens.next();
                    Ok(Expr::Variable { name, negated: true })
                },
                None => Err(ParseError::UnexpectedEndOfLine),
                Some(_) => Err(ParseError::InvalidCommand),
            }
        },
        Some(Token::Number(text)) => {
            let value = number_literal(text, false);
            tokens.next();
            Ok(Expr::Literal { value })
        },
        Some(Token::Identifier(name)) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable { name, negated: false })
        },
        Some(Token::LParen) => {
            tokens.next();
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(Expr::Grouping { inner: Box::new(inner), }),
                _ => Err(ParseError::ExpectedClosingParen),
            }
        },
        None => Err(ParseError::UnexpectedEndOfLine),
        Some(_) => Err(ParseError::InvalidCommand),
    }
}

/// Converts a number lexeme into a literal value: an integer when the signed
/// lexeme parses as one, otherwise a float.
///
/// Building the signed lexeme before parsing keeps the full `i64` range
/// reachable (`-9223372036854775808` is a valid integer literal even though
/// its magnitude alone is not).
fn number_literal(text: &str, negated: bool) -> LiteralValue {
    let lexeme = if negated {
        format!("-{text}")
    } else {
        text.to_owned()
    };

    if let Ok(n) = lexeme.parse::<i64>() {
        return LiteralValue::Integer(n);
    }
    // A digits-only lexeme always parses as f64; oversized integer literals
    // land here and continue life as floats.
    LiteralValue::Float(lexeme.parse().unwrap_or(f64::INFINITY))
}
