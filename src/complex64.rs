use crate::bits::{abs, copysign, inf2one, is_finite, is_inf, is_nan, INF};
use faer::complex_native::c32;
use log::trace;
use num_complex::Complex32;
use num_traits::{One, Zero};
use std::{
    fmt,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A single precision complex number with two `f32` components.
///
/// Arithmetic reproduces a native `complex64` bit for bit, including NaN,
/// signed zero and infinity handling. Values are plain `Copy` data: every
/// operation takes its operands by value and returns a new number. Any bit
/// pattern is a valid component; nothing is normalized.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex64 {
    re: f32,
    im: f32,
}

#[allow(clippy::should_implement_trait)]
impl Complex64 {
    /// A constant `Complex64` 0.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// A constant `Complex64` 1.
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// A constant `Complex64` _i_, the imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f32, im: f32) -> Self {
        Complex64 { re, im }
    }

    /// Get the real part
    pub fn real(self) -> f32 {
        self.re
    }

    /// Get the imaginary part
    pub fn imag(self) -> f32 {
        self.im
    }

    /// True if both parts compare equal to zero. `-0.0` counts as zero.
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// `==`: componentwise IEEE equality, so a NaN part never compares equal.
    pub fn eq(self, other: Self) -> bool {
        self.re == other.re && self.im == other.im
    }

    /// `!=`: the exact negation of [`Complex64::eq`].
    pub fn neq(self, other: Self) -> bool {
        self.re != other.re || self.im != other.im
    }

    /// `+`: componentwise `f32` addition.
    pub fn add(self, other: Self) -> Self {
        Complex64::new(self.re + other.re, self.im + other.im)
    }

    /// `-`: componentwise `f32` subtraction.
    pub fn sub(self, other: Self) -> Self {
        Complex64::new(self.re - other.re, self.im - other.im)
    }

    /// `*`: the cross terms are formed in `f64` and narrowed once per part.
    pub fn mul(self, other: Self) -> Self {
        let r1 = f64::from(self.re);
        let i1 = f64::from(self.im);
        let r2 = f64::from(other.re);
        let i2 = f64::from(other.im);
        Complex64::new((r1 * r2 - i1 * i2) as f32, (r1 * i2 + i1 * r2) as f32)
    }

    /// `/`: Smith's algorithm in `f64`, with C99 Annex G correction of
    /// a fully indeterminate quotient.
    ///
    /// Robert L. Smith, Algorithm 116: Complex division.
    /// Commun. ACM 5(8): 435 (1962).
    pub fn div(self, other: Self) -> Self {
        let r1 = f64::from(self.re);
        let i1 = f64::from(self.im);
        let r2 = f64::from(other.re);
        let i2 = f64::from(other.im);

        let (mut e, mut f) = if abs(r2) >= abs(i2) {
            let ratio = i2 / r2;
            let denom = r2 + ratio * i2;
            ((r1 + i1 * ratio) / denom, (i1 - r1 * ratio) / denom)
        } else {
            let ratio = r2 / i2;
            let denom = i2 + ratio * r2;
            ((r1 * ratio + i1) / denom, (i1 * ratio - r1) / denom)
        };

        if is_nan(e) && is_nan(f) {
            (e, f) = correct_nan_quotient(r1, i1, r2, i2, other.is_zero());
        }

        Complex64::new(e as f32, f as f32)
    }

    /// Create a NaN complex number
    pub fn nan() -> Self {
        Complex64::new(f32::NAN, f32::NAN)
    }

    /// Check if either part is NaN
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if either part is infinite
    pub fn is_infinite(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Check if both parts are finite
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// Recover infinities and zeros from a (NaN, NaN) quotient of `(a + bi) / (c + di)`.
///
/// Matches C99: ISO/IEC 9899:1999 G.5.1 Multiplicative operators. Returns
/// (NaN, NaN) when no rule applies.
fn correct_nan_quotient(a: f64, b: f64, c: f64, d: f64, divisor_is_zero: bool) -> (f64, f64) {
    if divisor_is_zero && (!is_nan(a) || !is_nan(b)) {
        trace!("complex division: zero divisor, quotient forced to infinity");
        let scale = copysign(INF, c);
        (scale * a, scale * b)
    } else if (is_inf(a) || is_inf(b)) && is_finite(c) && is_finite(d) {
        trace!("complex division: infinite dividend over finite divisor");
        let a = inf2one(a);
        let b = inf2one(b);
        (INF * (a * c + b * d), INF * (b * c - a * d))
    } else if (is_inf(c) || is_inf(d)) && is_finite(a) && is_finite(b) {
        trace!("complex division: finite dividend over infinite divisor");
        let c = inf2one(c);
        let d = inf2one(d);
        (0.0 * (a * c + b * d), 0.0 * (b * c - a * d))
    } else {
        (f64::NAN, f64::NAN)
    }
}

#[allow(clippy::partialeq_ne_impl)]
impl PartialEq for Complex64 {
    fn eq(&self, other: &Self) -> bool {
        Complex64::eq(*self, *other)
    }

    fn ne(&self, other: &Self) -> bool {
        Complex64::neq(*self, *other)
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

// Implement basic arithmetic operations
macro_rules! impl_self_math_op(
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident) => (
        impl $trt for Complex64 {
            type Output = Self;

            fn $mth(self, other: Self) -> Self::Output {
                Complex64::$mth(self, other)
            }
        }

        impl $trt<&Complex64> for Complex64 {
            type Output = Self;

            fn $mth(self, other: &Complex64) -> Self::Output {
                Complex64::$mth(self, *other)
            }
        }

        impl $trt<Complex64> for &Complex64 {
            type Output = Complex64;

            fn $mth(self, other: Complex64) -> Self::Output {
                Complex64::$mth(*self, other)
            }
        }

        impl $trt<&Complex64> for &Complex64 {
            type Output = Complex64;

            fn $mth(self, other: &Complex64) -> Self::Output {
                Complex64::$mth(*self, *other)
            }
        }

        impl $assign_trt for Complex64 {
            fn $assign_mth(&mut self, other: Self) {
                *self = Complex64::$mth(*self, other);
            }
        }

        impl $assign_trt<&Complex64> for Complex64 {
            fn $assign_mth(&mut self, other: &Complex64) {
                *self = Complex64::$mth(*self, *other);
            }
        }
    );
);

impl_self_math_op!(Add, add, AddAssign, add_assign);
impl_self_math_op!(Sub, sub, SubAssign, sub_assign);
impl_self_math_op!(Mul, mul, MulAssign, mul_assign);
impl_self_math_op!(Div, div, DivAssign, div_assign);

impl Neg for Complex64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Complex64::new(-self.re, -self.im)
    }
}

impl Neg for &Complex64 {
    type Output = Complex64;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Zero for Complex64 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex64::is_zero(*self)
    }
}

impl One for Complex64 {
    fn one() -> Self {
        Self::ONE
    }
}

impl Sum for Complex64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Complex64::add)
    }
}

impl<'a> Sum<&'a Complex64> for Complex64 {
    fn sum<I: Iterator<Item = &'a Complex64>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| Complex64::add(acc, *x))
    }
}

impl Product for Complex64 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Complex64::mul)
    }
}

impl<'a> Product<&'a Complex64> for Complex64 {
    fn product<I: Iterator<Item = &'a Complex64>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| Complex64::mul(acc, *x))
    }
}

impl From<(f32, f32)> for Complex64 {
    fn from(value: (f32, f32)) -> Self {
        Complex64::new(value.0, value.1)
    }
}

impl From<f32> for Complex64 {
    fn from(re: f32) -> Self {
        Complex64::new(re, 0.0)
    }
}

impl From<Complex64> for (f32, f32) {
    fn from(value: Complex64) -> Self {
        (value.re, value.im)
    }
}

impl From<Complex32> for Complex64 {
    fn from(value: Complex32) -> Self {
        Complex64::new(value.re, value.im)
    }
}

impl From<Complex64> for Complex32 {
    fn from(value: Complex64) -> Self {
        Complex32::new(value.re, value.im)
    }
}

impl From<c32> for Complex64 {
    fn from(value: c32) -> Self {
        Complex64::new(value.re, value.im)
    }
}

impl From<Complex64> for c32 {
    fn from(value: Complex64) -> Self {
        c32::new(value.re, value.im)
    }
}
