use crate::interpreter::value::ValueKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A binary operator was applied to operands of different numeric types.
    TypeMismatch {
        /// The verb describing the operation, e.g. `add`.
        operation: &'static str,
        /// The type of the left operand.
        left:      ValueKind,
        /// The type of the right operand.
        right:     ValueKind,
    },
    /// `BEG` input was neither a valid integer nor a valid float literal.
    InvalidInput {
        /// The text that was read.
        input: String,
    },
    /// `BEG` could not read a value because the input stream ended.
    InputUnavailable {
        /// The variable that was waiting for a value.
        name: String,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable '{name}' is not defined")
            },
            Self::TypeMismatch { operation,
                                 left,
                                 right, } => {
                write!(f, "Cannot {operation} {left} to {right}. Type mismatch.")
            },
            Self::InvalidInput { input } => {
                write!(f, "Input '{input}' is not a valid integer or float")
            },
            Self::InputUnavailable { name } => {
                write!(f, "No input available for variable '{name}'")
            },
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
