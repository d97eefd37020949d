/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if the value is exactly an
/// integer.
///
/// Returns `None` for non-finite values, values with a fractional part, and
/// values whose magnitude exceeds [`MAX_SAFE_INT`] (beyond which `f64` cannot
/// represent every integer, so the conversion would not be trustworthy).
///
/// ## Example
/// ```
/// use snol::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(42.0), Some(42));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
///
/// assert_eq!(f64_to_i64_exact(2.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_exact(1e18), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_INT as f64 {
        return None;
    }
    Some(value as i64)
}
