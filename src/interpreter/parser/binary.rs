use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, factor::parse_factor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators `+` and `-`:
/// `a - b - c` parses as `(a - b) - c`, never `a - (b - c)`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// When no operator follows the first term, no wrapping node is created; the
/// term is passed through unchanged.
///
/// # Parameters
/// - `tokens`: Token iterator over the lexed line.
///
/// # Returns
/// An expression tree combining term-level nodes.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_term(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/`, and `%`.
///
/// The rule is: `term := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator over the lexed line.
///
/// # Returns
/// An expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not arithmetic operators.
///
/// # Example
/// ```
/// use snol::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
