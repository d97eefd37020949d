use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::Value,
    },
};

/// Evaluates a binary arithmetic operation.
///
/// Both operands must have the same numeric kind; integers and floats never
/// mix, and no operator promotes one to the other. Division of two integers
/// is floor division, and modulo follows the floor convention for both kinds
/// (the result's sign follows the divisor). Integer arithmetic is checked.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed result.
///
/// # Example
/// ```
/// use snol::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Div,
///                          Value::Integer(-7),
///                          Value::Integer(2)).unwrap();
/// assert_eq!(result, Value::Integer(-4));
///
/// let mixed = eval_binary(BinaryOperator::Add,
///                         Value::Integer(5),
///                         Value::Float(2.5));
/// assert!(mixed.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
    if left.kind() != right.kind() {
        return Err(RuntimeError::TypeMismatch { operation: op.verb(),
                                                left:      left.kind(),
                                                right:     right.kind(), });
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer(op, a, b),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(eval_float(op, a, b)?)),
        _ => unreachable!(),
    }
}

fn eval_integer(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => a.checked_add(b).ok_or(RuntimeError::Overflow)?,
        Sub => a.checked_sub(b).ok_or(RuntimeError::Overflow)?,
        Mul => a.checked_mul(b).ok_or(RuntimeError::Overflow)?,
        Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            floor_div(a, b)?
        },
        Mod => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            floor_mod(a, b)?
        },
    };
    Ok(Value::Integer(result))
}

fn eval_float(op: BinaryOperator, a: f64, b: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    Ok(match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a / b
        },
        Mod => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            let remainder = a % b;
            if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
                remainder + b
            } else {
                remainder
            }
        },
    })
}

/// Floor division: the quotient rounds toward negative infinity.
///
/// `div_euclid` is not equivalent for negative divisors, so the truncating
/// quotient is corrected by hand. The divisor is known to be nonzero here;
/// the only remaining failure is `i64::MIN / -1`.
fn floor_div(a: i64, b: i64) -> EvalResult<i64> {
    let quotient = a.checked_div(b).ok_or(RuntimeError::Overflow)?;
    let remainder = a.checked_rem(b).ok_or(RuntimeError::Overflow)?;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Floor modulo: the result's sign follows the divisor, matching floor
/// division so that `a == b * floor_div(a, b) + floor_mod(a, b)`.
fn floor_mod(a: i64, b: i64) -> EvalResult<i64> {
    // `i64::MIN % -1` trips checked_rem even though the remainder itself is
    // exactly zero; only the quotient is unrepresentable.
    let Some(remainder) = a.checked_rem(b) else {
        return Ok(0);
    };

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}
