//! Bit-level helpers for `f64` used by the division correction path.
//!
//! The only places a float is reinterpreted as its IEEE 754 bit pattern are
//! [`abs`] and [`copysign`]; everything else is built on float comparisons.

const SIGN: u64 = 1 << 63;

/// Positive infinity, built from its bit pattern.
pub(crate) const INF: f64 = f64::from_bits(0x7FF0_0000_0000_0000);

/// Absolute value of `x`, computed by clearing the sign bit.
///
/// Special cases:
/// - `abs(±0) = +0`
/// - `abs(±Inf) = +Inf`
/// - `abs(NaN) = NaN`
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN)
}

/// Reports whether `f` is a NaN. Only NaNs satisfy `f != f`.
#[inline]
#[allow(clippy::eq_op)]
pub(crate) fn is_nan(f: f64) -> bool {
    f != f
}

/// Reports whether `f` is neither NaN nor an infinity.
#[inline]
pub(crate) fn is_finite(f: f64) -> bool {
    !is_nan(f - f)
}

/// Reports whether `f` is an infinity of either sign.
#[inline]
pub(crate) fn is_inf(f: f64) -> bool {
    !is_nan(f) && !is_finite(f)
}

/// Returns a value with the magnitude of `x` and the sign of `y`.
#[inline]
pub(crate) fn copysign(x: f64, y: f64) -> f64 {
    f64::from_bits((x.to_bits() & !SIGN) | (y.to_bits() & SIGN))
}

/// Returns a signed 1 if `f` is an infinity and a signed 0 otherwise.
/// The sign of the result is the sign of `f`.
#[inline]
pub(crate) fn inf2one(f: f64) -> f64 {
    let g = if is_inf(f) { 1.0 } else { 0.0 };
    copysign(g, f)
}
