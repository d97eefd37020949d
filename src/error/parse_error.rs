#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found a character that belongs to no token class.
    InvalidToken {
        /// The offending text.
        token: String,
    },
    /// No command production matched the line.
    InvalidCommand,
    /// A command parsed successfully but tokens remained on the line.
    TrailingTokens,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// The line ended in the middle of an expression.
    UnexpectedEndOfLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token } => write!(f, "Invalid token '{token}'"),
            Self::InvalidCommand => write!(f, "Invalid command"),
            Self::TrailingTokens => write!(f, "Parser did not reach end of line"),
            Self::ExpectedClosingParen => write!(f, "Expected right parenthesis"),
            Self::UnexpectedEndOfLine => write!(f, "Unexpected end of line"),
        }
    }
}

impl std::error::Error for ParseError {}
