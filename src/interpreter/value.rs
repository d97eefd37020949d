use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// SNOL knows exactly two numeric types. A variable's type is the type of the
/// value currently bound to it: fixed by its latest assignment, never
/// implicitly coerced afterward, and free to change on the next assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Float(f64),
}

/// The numeric kind tag carried alongside every evaluated value.
///
/// Binary operators compare kinds for equality before doing any arithmetic;
/// operands of different kinds always fail with a type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The integer type, written `INT` in messages.
    Integer,
    /// The floating-point type, written `FLOAT` in messages.
    Float,
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Float(f) => Self::Float(f),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Value {
    /// Returns the kind tag of this value.
    ///
    /// # Example
    /// ```
    /// use snol::interpreter::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Integer(3).kind(), ValueKind::Integer);
    /// assert_eq!(Value::Float(3.0).kind(), ValueKind::Float);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
        }
    }

    /// Returns the arithmetic negation of this value.
    ///
    /// Used for the sign-prefixed factor form `-x`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Overflow`] for the one integer with no
    /// representable negation.
    pub fn negated(self) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => n.checked_neg()
                                 .map(Self::Integer)
                                 .ok_or(RuntimeError::Overflow),
            Self::Float(f) => Ok(Self::Float(-f)),
        }
    }
}

impl std::fmt::Display for Value {
    /// Integers print without a decimal point, floats always with one
    /// (`Debug` formatting of `f64` keeps the `.0` on integral values).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "INT"),
            Self::Float => write!(f, "FLOAT"),
        }
    }
}
