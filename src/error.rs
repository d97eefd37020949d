/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// command line. Parse errors include unrecognized characters, grammar
/// mismatches, unbalanced parentheses, and trailing tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a command,
/// such as type mismatches, undefined variables, invalid `BEG` input,
/// division by zero, and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
