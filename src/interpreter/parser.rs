/// Binary expression parsing.
///
/// Implements the left-associative expression and term folds for the additive
/// and multiplicative operator levels.
pub mod binary;

/// Command parsing.
///
/// Implements the top-level dispatch between assignment, `BEG`, `PRINT`,
/// `EXIT!`, and bare-expression commands.
pub mod command;

/// Core parsing entry points.
///
/// Contains the parse entry function, the shared result type, and the
/// end-of-line check applied after every successful production.
pub mod core;

/// Factor parsing.
///
/// Parses the tightest-binding grammar unit: literals, variable references
/// (including the restricted `-` sign prefix), and parenthesized groups.
pub mod factor;
