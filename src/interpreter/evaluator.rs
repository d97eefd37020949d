/// Binary operator evaluation logic.
///
/// Implements the typed arithmetic for `+`, `-`, `*`, `/`, and `%`, including
/// the strict same-type requirement and the floor-based integer division and
/// modulo semantics.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the command dispatch (assignment, `BEG`, `PRINT`, `EXIT!`,
/// expression), the recursive expression walk, and the session outcome type.
pub mod core;
