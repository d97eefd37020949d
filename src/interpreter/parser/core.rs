use crate::{
    ast::Command,
    error::ParseError,
    interpreter::{lexer::Token, parser::command::parse_command},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one command from a token sequence.
///
/// This is the entry point for parsing. It dispatches to the command
/// productions and then requires the next unconsumed token to be the end of
/// the line, so a complete command followed by trailing garbage is rejected
/// as a whole.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The parsed [`Command`] node.
///
/// # Errors
/// - [`ParseError::TrailingTokens`] when tokens remain after a complete
///   command.
/// - Any error raised by the command productions.
pub fn parse(tokens: &[Token]) -> ParseResult<Command> {
    let mut tokens = tokens.iter().peekable();

    let command = parse_command(&mut tokens)?;

    match tokens.next() {
        None => Ok(command),
        Some(_) => Err(ParseError::TrailingTokens),
    }
}
