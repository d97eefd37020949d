use std::iter::Peekable;

use crate::{
    ast::{Command, OutputTarget},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_expression, core::ParseResult},
    },
};

/// Parses a single command.
///
/// A command may be one of:
/// - an assignment: `<variable> = <expression>`
/// - an input-read: `BEG <variable>`
/// - an output: `PRINT <number>` or `PRINT <variable>`
/// - the exit directive: `EXIT!`
/// - a bare expression, evaluated and discarded.
///
/// Parsing is attempted in that order; the first production whose leading
/// tokens match wins, and productions that do not match consume nothing.
/// A `BEG` or `PRINT` with an invalid operand therefore falls through to the
/// expression fallback, which cannot parse the keyword and reports an
/// invalid command.
///
/// # Parameters
/// - `tokens`: Token iterator over the lexed line.
///
/// # Returns
/// A parsed [`Command`] node.
pub fn parse_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(command) = parse_assignment(tokens)? {
        return Ok(command);
    }
    if let Some(command) = parse_input(tokens) {
        return Ok(command);
    }
    if let Some(command) = parse_output(tokens) {
        return Ok(command);
    }
    if let Some(Token::Exit) = tokens.peek() {
        tokens.next();
        return Ok(Command::Exit);
    }

    // An empty line matches no production at all.
    if tokens.peek().is_none() {
        return Err(ParseError::InvalidCommand);
    }

    let expr = parse_expression(tokens)?;
    Ok(Command::Expression { expr })
}

/// Parses an assignment of the form `<variable> = <expression>`.
///
/// The function performs a limited lookahead: only when the next token is a
/// variable name and the one after it is `=` is an assignment parsed. If the
/// pattern does not match, returns `Ok(None)` without consuming tokens, so a
/// line like `x + 1` still reaches the expression fallback.
///
/// # Errors
/// Returns a `ParseError` when the right-hand expression is malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Command>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Identifier(_)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(Token::Equals) = lookahead.peek() {
            let name = if let Some(Token::Identifier(n)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            tokens.next(); // consume '='

            let value = parse_expression(tokens)?;
            return Ok(Some(Command::Assignment { name, value }));
        }
    }
    Ok(None)
}

/// Parses an input-read of the form `BEG <variable>`.
///
/// `BEG` must be followed by a bare variable token; anything else is a
/// dispatch mismatch and the function returns `None` without consuming
/// tokens.
fn parse_input<'a, I>(tokens: &mut Peekable<I>) -> Option<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Beg) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(Token::Identifier(name)) = lookahead.peek() {
            let name = name.clone();
            tokens.next();
            tokens.next();
            return Some(Command::Input { name });
        }
    }
    None
}

/// Parses an output of the form `PRINT <number>` or `PRINT <variable>`.
///
/// `PRINT` takes exactly one bare number or variable token. A number target
/// keeps its lexeme so it can be printed back verbatim. Any other operand is
/// a dispatch mismatch and the function returns `None` without consuming
/// tokens.
fn parse_output<'a, I>(tokens: &mut Peekable<I>) -> Option<Command>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Print) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        let target = match lookahead.peek() {
            Some(Token::Number(text)) => OutputTarget::Literal(text.clone()),
            Some(Token::Identifier(name)) => OutputTarget::Variable(name.clone()),
            _ => return None,
        };
        tokens.next();
        tokens.next();
        return Some(Command::Output { target });
    }
    None
}
