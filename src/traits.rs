use std::{fmt, ops};

use num_complex::Complex;

pub trait Int: num_traits::PrimInt + fmt::Display + fmt::Debug {
    fn from_usize(i: usize) -> Self {
        match Self::from(i) {
            Some(j) => j,
            None => panic!("must be able to create Int from {}", i),
        }
    }

    fn to_index(&self) -> usize {
        match self.to_usize() {
            Some(j) => j,
            None => panic!("must be able to convert Int to usize: {}", self),
        }
    }
}

impl Int for usize {}
impl Int for u8 {}
impl Int for u16 {}
impl Int for u32 {}
impl Int for u64 {}
impl Int for u128 {}

impl Int for isize {}
impl Int for i8 {}
impl Int for i16 {}
impl Int for i32 {}
impl Int for i64 {}
impl Int for i128 {}

/// Element type of a factorization.
///
/// Provides the arithmetic used by elimination, substitution and the
/// determinant: field operations, a magnitude for pivot comparison,
/// conjugation and a division that reports inexact results.
pub trait Scalar:
    Copy
    + PartialEq
    + num_traits::Zero
    + num_traits::One
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Sub<Output = Self>
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + Norm<Self::Norm>
    + fmt::Display
    + fmt::Debug
{
    type Norm: PartialOrd + Copy + fmt::Display;

    /// Complex conjugate. Identity for real types.
    fn conj(&self) -> Self {
        *self
    }

    /// `self / rhs` if the quotient is representable in `Self`.
    fn checked_quotient(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }

    /// `self - a * b`, or `None` if an intermediate overflows.
    fn checked_mul_sub(self, a: Self, b: Self) -> Option<Self> {
        Some(self - a * b)
    }

    /// `self * rhs`, or `None` on overflow.
    fn checked_product(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    /// `self / |self|` for nonzero `self`: the sign of a real, the unit
    /// phase of a complex number.
    fn phase(&self) -> Self;

    #[cfg(feature = "debug")]
    fn pretty_string(&self, _config: pretty_dtoa::FmtFloatConfig) -> String {
        format!("{}", self)
    }
}

impl Scalar for f64 {
    type Norm = f64;

    fn phase(&self) -> Self {
        f64::signum(*self)
    }

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        pretty_dtoa::dtoa(*self, config)
    }
}

impl Scalar for f32 {
    type Norm = f32;

    fn phase(&self) -> Self {
        f32::signum(*self)
    }

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        pretty_dtoa::dtoa(*self as f64, config)
    }
}

impl Scalar for Complex<f64> {
    type Norm = f64;

    fn conj(&self) -> Self {
        Complex::conj(self)
    }

    fn phase(&self) -> Self {
        *self / Complex::norm(*self)
    }

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        format!(
            "{}{}j{}",
            pretty_dtoa::dtoa(self.re, config),
            if self.im.signum() < 0.0 { "-" } else { "+" },
            pretty_dtoa::dtoa(self.im.abs(), config)
        )
    }
}

impl Scalar for Complex<f32> {
    type Norm = f32;

    fn conj(&self) -> Self {
        Complex::conj(self)
    }

    fn phase(&self) -> Self {
        *self / Complex::norm(*self)
    }

    #[cfg(feature = "debug")]
    fn pretty_string(&self, config: pretty_dtoa::FmtFloatConfig) -> String {
        format!(
            "{}{}j{}",
            pretty_dtoa::dtoa(self.re as f64, config),
            if self.im.signum() < 0.0 { "-" } else { "+" },
            pretty_dtoa::dtoa(self.im.abs() as f64, config)
        )
    }
}

// Integer magnitudes are unsigned so that `MIN` has one.
macro_rules! int_scalar {
    ($($t:ty => $u:ty),*) => {$(
        impl Scalar for $t {
            type Norm = $u;

            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                match self.checked_rem(rhs) {
                    Some(0) => self.checked_div(rhs),
                    _ => None,
                }
            }

            fn checked_mul_sub(self, a: Self, b: Self) -> Option<Self> {
                self.checked_sub(a.checked_mul(b)?)
            }

            fn checked_product(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }

            fn phase(&self) -> Self {
                self.signum()
            }
        }

        impl Norm<$u> for $t {
            fn norm(&self) -> $u {
                self.unsigned_abs()
            }
        }
    )*};
}

int_scalar!(i32 => u32, i64 => u64);

pub trait Norm<F> {
    fn norm(&self) -> F;
}

impl Norm<f64> for f64 {
    fn norm(&self) -> f64 {
        f64::abs(*self)
    }
}

impl Norm<f32> for f32 {
    fn norm(&self) -> f32 {
        f32::abs(*self)
    }
}

impl Norm<f64> for Complex<f64> {
    fn norm(&self) -> f64 {
        num_complex::Complex::norm(*self)
    }
}

impl Norm<f32> for Complex<f32> {
    fn norm(&self) -> f32 {
        num_complex::Complex::norm(*self)
    }
}

/// Static promotion table: the element type a copying factorization
/// computes in, closed under the division and subtraction of elimination.
pub trait Promote: Copy {
    type Output: Scalar;

    fn promote(self) -> Self::Output;
}

macro_rules! promote_identity {
    ($($t:ty),*) => {$(
        impl Promote for $t {
            type Output = $t;

            fn promote(self) -> $t {
                self
            }
        }
    )*};
}

promote_identity!(f32, f64, Complex<f32>, Complex<f64>);

impl Promote for i32 {
    type Output = f64;

    fn promote(self) -> f64 {
        f64::from(self)
    }
}

impl Promote for i64 {
    type Output = f64;

    fn promote(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_quotient_must_be_exact() {
        assert_eq!(6i64.checked_quotient(3), Some(2));
        assert_eq!(7i64.checked_quotient(3), None);
        assert_eq!(1i32.checked_quotient(0), None);
        assert_eq!(i64::MIN.checked_quotient(-1), None);
    }

    #[test]
    fn float_quotient_always_representable() {
        assert_eq!(1.0f64.checked_quotient(4.0), Some(0.25));
        assert!(1.0f64.checked_quotient(0.0).unwrap().is_infinite());
    }

    #[test]
    fn promotion_table() {
        let x: f64 = 3i32.promote();
        assert_eq!(x, 3.0);
        let z: Complex<f32> = Complex::new(1.0f32, -2.0).promote();
        assert_eq!(z, Complex::new(1.0, -2.0));
    }

    #[test]
    fn complex_conj_and_norm() {
        let z: Complex<f64> = Complex::new(3.0, 4.0);
        assert_eq!(Scalar::conj(&z), Complex::new(3.0, -4.0));
        assert_eq!(Norm::norm(&z), 5.0);
        assert_eq!(z.phase(), Complex::new(0.6, 0.8));
        assert_eq!(Scalar::conj(&-2.5f64), -2.5);
        assert_eq!((-2.5f64).phase(), -1.0);
    }

    #[test]
    fn int_arithmetic_is_checked() {
        assert_eq!(Norm::norm(&i64::MIN), 1u64 << 63);
        assert_eq!(Norm::norm(&-7i32), 7u32);
        assert_eq!(10i64.checked_mul_sub(3, 4), Some(-2));
        assert_eq!(i64::MIN.checked_mul_sub(1, 1), None);
        assert_eq!(0i64.checked_mul_sub(i64::MAX, 2), None);
        assert_eq!(i32::MAX.checked_product(2), None);
        assert_eq!((-6i32).phase(), -1);
    }
}
