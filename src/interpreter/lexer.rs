use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a command line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords take priority over the variable pattern for exact matches, and
/// the longest match wins otherwise, so `BEG` is a keyword while `BEGIN` and
/// a bare `EXIT` are ordinary variable names.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. The lexeme is kept as
    /// text; no sign is ever consumed here, and whether it denotes an integer
    /// or a float is decided where the literal is used.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),
    /// `BEG`
    #[token("BEG")]
    Beg,
    /// `PRINT`
    #[token("PRINT")]
    Print,
    /// `EXIT!`
    #[token("EXIT!")]
    Exit,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Variable name tokens such as `x` or `num1`: a letter followed by
    /// letters or digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// Whitespace separates tokens and is never itself a token.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes one command line.
///
/// Scans the line left to right with greedy longest-match semantics and
/// returns the token sequence. Tokenization is total over the line: it
/// either succeeds completely or fails for the whole line, with no partial
/// token list.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] carrying the offending text when any
/// character matches no token class.
///
/// # Example
/// ```
/// use snol::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("PRINT num").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Print,
///                 Token::Identifier("num".to_owned())]);
///
/// assert!(tokenize("#").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::InvalidToken { token: lexer.slice().to_owned(), });
            },
        }
    }

    Ok(tokens)
}
