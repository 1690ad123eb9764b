//! Quaternions.

use crate::{
    error::{self, AlgebraError, Result},
    num,
    operand::Operand,
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// A quaternion `r + i·î + j·ĵ + k·k̂` with `f64` components.
///
/// Quaternions are plain values: every operation returns a new quaternion.
/// Multiplication is the Hamilton product, which is not commutative, so the
/// operand order of `*` and `/` matters. Arithmetic accepts real (`f64`),
/// complex ([`Complex64`]) and quaternion operands on either side, see
/// [`Operand`].
///
/// `Display` gives `Quaternion(r = 1.0, i = 2.0, j = 3.0, k = 4.0)` and
/// `Debug` gives the constructor form `Quaternion(1.0, 2.0, 3.0, 4.0)`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    r: f64,
    i: f64,
    j: f64,
    k: f64,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(r: f64, i: f64, j: f64, k: f64) -> Self {
        Self { r, i, j, k }
    }

    /// Creates a quaternion with only a real part.
    #[inline]
    pub const fn from_real(r: f64) -> Self {
        Self::new(r, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion from a complex number, putting its real and
    /// imaginary parts in the r- and i-components.
    #[inline]
    pub const fn from_complex(value: Complex64) -> Self {
        Self::new(value.re, value.im, 0.0, 0.0)
    }

    /// Creates a quaternion from a real part and the i-, j- and
    /// k-components.
    #[inline]
    pub const fn from_parts(real: f64, [i, j, k]: [f64; 3]) -> Self {
        Self::new(real, i, j, k)
    }

    /// The multiplicative identity `(1, 0, 0, 0)`.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_real(1.0)
    }

    #[inline]
    pub const fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub const fn i(&self) -> f64 {
        self.i
    }

    #[inline]
    pub const fn j(&self) -> f64 {
        self.j
    }

    #[inline]
    pub const fn k(&self) -> f64 {
        self.k
    }

    #[inline]
    pub const fn real(&self) -> f64 {
        self.r
    }

    #[inline]
    pub const fn imag(&self) -> [f64; 3] {
        [self.i, self.j, self.k]
    }

    /// The components in `[r, i, j, k]` order.
    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    /// Whether the i-, j- and k-components are all zero.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.i == 0.0 && self.j == 0.0 && self.k == 0.0
    }

    /// Whether the j- and k-components are zero, so that the quaternion is
    /// a complex number `r + i·î`.
    #[inline]
    pub fn is_complex(&self) -> bool {
        self.j == 0.0 && self.k == 0.0
    }

    /// Whether the real part is zero.
    #[inline]
    pub fn is_pure_imaginary(&self) -> bool {
        self.r == 0.0
    }

    /// Whether all components are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.r == 0.0 && self.is_real()
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    #[inline]
    pub fn negated(&self) -> Self {
        self.mapped(|component| -component)
    }

    /// Computes the square of the norm, `r² + i² + j² + k²`.
    #[inline]
    pub fn abs2(&self) -> f64 {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Computes the norm (magnitude).
    #[inline]
    pub fn abs(&self) -> f64 {
        self.abs2().sqrt()
    }

    /// Computes the multiplicative inverse, the conjugate divided by the
    /// squared norm.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the squared norm is zero.
    pub fn inverse(&self) -> Result<Self> {
        let abs2 = self.abs2();
        if abs2 == 0.0 {
            return Err(AlgebraError::division_by_zero("quaternion inversion"));
        }
        Ok(self.conjugate().scaled(abs2.recip()))
    }

    /// Computes the quaternion divided by its norm.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the norm is zero.
    pub fn normalized(&self) -> Result<Self> {
        let norm = self.abs();
        if norm == 0.0 {
            return Err(AlgebraError::division_by_zero(
                "quaternion normalization",
            ));
        }
        Ok(self.scaled(norm.recip()))
    }

    /// Multiplies every component by the given factor.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        self.mapped(|component| component * factor)
    }

    /// Returns a quaternion with the given closure applied to each
    /// component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.i), f(self.j), f(self.k))
    }

    #[inline]
    pub fn ceil(&self) -> Self {
        self.mapped(f64::ceil)
    }

    #[inline]
    pub fn floor(&self) -> Self {
        self.mapped(f64::floor)
    }

    /// Rounds every component to the given number of decimal digits (to an
    /// integer for `None`), with ties going to the even digit. Negative digit
    /// counts round to tens, hundreds and so on.
    #[inline]
    pub fn round(&self, ndigits: Option<i32>) -> Self {
        self.mapped(|component| num::round_to_digits(component, ndigits))
    }

    /// Computes `self + rhs`. A real operand only changes the r-component
    /// and a complex operand only the r- and i-components.
    pub fn added(&self, rhs: impl Into<Operand>) -> Self {
        match rhs.into() {
            Operand::Real(x) => Self::new(self.r + x, self.i, self.j, self.k),
            Operand::Complex(c) => Self::new(self.r + c.re, self.i + c.im, self.j, self.k),
            Operand::Quaternion(q) => Self::new(
                self.r + q.r,
                self.i + q.i,
                self.j + q.j,
                self.k + q.k,
            ),
        }
    }

    /// Computes `self - rhs`.
    pub fn subtracted(&self, rhs: impl Into<Operand>) -> Self {
        match rhs.into() {
            Operand::Real(x) => Self::new(self.r - x, self.i, self.j, self.k),
            Operand::Complex(c) => Self::new(self.r - c.re, self.i - c.im, self.j, self.k),
            Operand::Quaternion(q) => Self::new(
                self.r - q.r,
                self.i - q.i,
                self.j - q.j,
                self.k - q.k,
            ),
        }
    }

    /// Computes `lhs - self` as `(-self) + lhs`.
    pub fn subtracted_from(&self, lhs: impl Into<Operand>) -> Self {
        self.negated().added(lhs)
    }

    /// Computes the product `self * rhs`.
    ///
    /// A complex operand `a + bi` acts as the quaternion `(a, b, 0, 0)`.
    pub fn multiplied(&self, rhs: impl Into<Operand>) -> Self {
        match rhs.into() {
            Operand::Real(x) => self.scaled(x),
            Operand::Complex(c) => {
                let (a, b) = (c.re, c.im);
                Self::new(
                    self.r * a - self.i * b,
                    self.r * b + self.i * a,
                    self.j * a + self.k * b,
                    self.k * a - self.j * b,
                )
            }
            Operand::Quaternion(q) => hamilton_product(self, &q),
        }
    }

    /// Computes the product `lhs * self`, with `lhs` as the left factor.
    pub fn premultiplied(&self, lhs: impl Into<Operand>) -> Self {
        match lhs.into() {
            Operand::Real(x) => self.mapped(|component| x * component),
            Operand::Complex(c) => {
                let (a, b) = (c.re, c.im);
                Self::new(
                    a * self.r - b * self.i,
                    a * self.i + b * self.r,
                    a * self.j - b * self.k,
                    a * self.k + b * self.j,
                )
            }
            Operand::Quaternion(q) => hamilton_product(&q, self),
        }
    }

    /// Computes `self / rhs`. A real divisor scales every component by its
    /// reciprocal, while complex and quaternion divisors give
    /// `self * rhs.inverse()`.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the divisor is zero.
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        match rhs.into() {
            Operand::Real(x) => {
                if x == 0.0 {
                    return Err(AlgebraError::division_by_zero("quaternion division"));
                }
                Ok(self.scaled(x.recip()))
            }
            Operand::Complex(c) => {
                let inverse = Self::from_complex(c).inverse()?;
                Ok(self.multiplied(Complex64::new(inverse.r, inverse.i)))
            }
            Operand::Quaternion(q) => Ok(self.multiplied(q.inverse()?)),
        }
    }

    /// Computes the reversed division `lhs / self`, defined as
    /// `self.inverse() * lhs`.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if `self` is zero.
    pub fn try_rdiv(&self, lhs: impl Into<Operand>) -> Result<Self> {
        Ok(self.inverse()?.multiplied(lhs))
    }

    /// Computes the componentwise floor of `self / rhs`.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the divisor is zero.
    pub fn div_floor(&self, rhs: impl Into<Operand>) -> Result<Self> {
        Ok(self.try_div(rhs)?.floor())
    }

    /// Computes the remainder of every component divided by `modulus`. The
    /// remainders take the sign of the modulus.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the modulus is zero.
    pub fn try_rem(&self, modulus: f64) -> Result<Self> {
        if modulus == 0.0 {
            return Err(AlgebraError::division_by_zero("quaternion remainder"));
        }
        Ok(self.mapped(|component| num::floored_rem(component, modulus)))
    }

    /// Computes [`div_floor`](Self::div_floor) and
    /// [`try_rem`](Self::try_rem) for the same modulus.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the modulus is zero.
    pub fn div_mod(&self, modulus: f64) -> Result<(Self, Self)> {
        Ok((self.div_floor(modulus)?, self.try_rem(modulus)?))
    }

    /// Whether the quaternion exactly equals the given number. A real number
    /// can only equal a real quaternion and a complex number only a
    /// quaternion with zero j- and k-components.
    pub fn equals(&self, other: impl Into<Operand>) -> bool {
        *self == other.into().to_quaternion()
    }
}

fn hamilton_product(a: &Quaternion, b: &Quaternion) -> Quaternion {
    Quaternion::new(
        a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
        a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
        a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
        a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
    )
}

impl From<f64> for Quaternion {
    #[inline]
    fn from(r: f64) -> Self {
        Self::from_real(r)
    }
}

impl From<Complex64> for Quaternion {
    #[inline]
    fn from(value: Complex64) -> Self {
        Self::from_complex(value)
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from(components: [f64; 4]) -> Self {
        bytemuck::cast(components)
    }
}

impl From<(f64, f64, f64, f64)> for Quaternion {
    #[inline]
    fn from((r, i, j, k): (f64, f64, f64, f64)) -> Self {
        Self::new(r, i, j, k)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        bytemuck::cast(quaternion)
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    a.added(b)
});

impl_binop!(Add, add, Quaternion, f64, Quaternion, |a, b| { a.added(*b) });

impl_binop!(Add, add, Quaternion, Complex64, Quaternion, |a, b| {
    a.added(*b)
});

impl_binop!(Add, add, f64, Quaternion, Quaternion, |a, b| { b.added(*a) });

impl_binop!(Add, add, Complex64, Quaternion, Quaternion, |a, b| {
    b.added(*a)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    a.subtracted(b)
});

impl_binop!(Sub, sub, Quaternion, f64, Quaternion, |a, b| {
    a.subtracted(*b)
});

impl_binop!(Sub, sub, Quaternion, Complex64, Quaternion, |a, b| {
    a.subtracted(*b)
});

impl_binop!(Sub, sub, f64, Quaternion, Quaternion, |a, b| {
    b.subtracted_from(*a)
});

impl_binop!(Sub, sub, Complex64, Quaternion, Quaternion, |a, b| {
    b.subtracted_from(*a)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    a.multiplied(b)
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| {
    a.multiplied(*b)
});

impl_binop!(Mul, mul, Quaternion, Complex64, Quaternion, |a, b| {
    a.multiplied(*b)
});

impl_binop!(Mul, mul, f64, Quaternion, Quaternion, |a, b| {
    b.premultiplied(*a)
});

impl_binop!(Mul, mul, Complex64, Quaternion, Quaternion, |a, b| {
    b.premultiplied(*a)
});

// The division operators panic on a zero divisor, like integer division.
// Use `try_div`/`try_rdiv` to handle it.

impl_binop!(Div, div, Quaternion, Quaternion, Quaternion, |a, b| {
    error::ok_or_panic(a.try_div(b))
});

impl_binop!(Div, div, Quaternion, f64, Quaternion, |a, b| {
    error::ok_or_panic(a.try_div(*b))
});

impl_binop!(Div, div, Quaternion, Complex64, Quaternion, |a, b| {
    error::ok_or_panic(a.try_div(*b))
});

impl_binop!(Div, div, f64, Quaternion, Quaternion, |a, b| {
    error::ok_or_panic(b.try_rdiv(*a))
});

impl_binop!(Div, div, Complex64, Quaternion, Quaternion, |a, b| {
    error::ok_or_panic(b.try_rdiv(*a))
});

impl_binop!(Rem, rem, Quaternion, f64, Quaternion, |a, b| {
    error::ok_or_panic(a.try_rem(*b))
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    *a = a.added(b);
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, f64, |a, b| {
    *a = a.added(*b);
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    *a = a.subtracted(b);
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, f64, |a, b| {
    *a = a.subtracted(*b);
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = a.multiplied(b);
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f64, |a, b| {
    *a = a.multiplied(*b);
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |q| { q.negated() });

impl PartialEq<f64> for Quaternion {
    fn eq(&self, other: &f64) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<Quaternion> for f64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other.equals(*self)
    }
}

impl PartialEq<Complex64> for Quaternion {
    fn eq(&self, other: &Complex64) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<Quaternion> for Complex64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other.equals(*self)
    }
}

impl Zero for Quaternion {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        Quaternion::is_zero(self)
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Self::identity()
    }
}

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(x, y)| x.abs_diff_eq(y, epsilon))
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
});

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(r = {:?}, i = {:?}, j = {:?}, k = {:?})",
            self.r, self.i, self.j, self.k
        )
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:?}, {:?}, {:?}, {:?})",
            self.r, self.i, self.j, self.k
        )
    }
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use crate::num::fuzzing::arbitrary_real;
    use arbitrary::{Arbitrary, Unstructured};
    use std::mem;

    #[derive(Clone, Copy, Debug)]
    pub struct ArbitraryQuaternion(pub Quaternion);

    impl Arbitrary<'_> for ArbitraryQuaternion {
        fn arbitrary(u: &mut Unstructured<'_>) -> arbitrary::Result<Self> {
            let r = arbitrary_real(u)?;
            let i = arbitrary_real(u)?;
            let j = arbitrary_real(u)?;
            let k = arbitrary_real(u)?;
            Ok(Self(Quaternion::new(r, i, j, k)))
        }

        fn size_hint(_depth: usize) -> (usize, Option<usize>) {
            let size = 4 * mem::size_of::<i32>();
            (size, Some(size))
        }
    }

    pub fn fuzz_test_quaternion_division(
        (dividend, divisor): (ArbitraryQuaternion, ArbitraryQuaternion),
    ) {
        let (dividend, divisor) = (dividend.0, divisor.0);

        match dividend.try_div(divisor) {
            Ok(quotient) => {
                assert_ne!(divisor.abs2(), 0.0, "Divided by zero quaternion");

                let reconstructed = quotient * divisor;
                let tolerance = 1e-9 * dividend.abs().max(1.0);
                assert!(
                    reconstructed.abs_diff_eq(&dividend, tolerance),
                    "({dividend:?} / {divisor:?}) * {divisor:?} gave {reconstructed:?}"
                );

                let left_quotient = divisor.try_rdiv(dividend);
                assert!(
                    left_quotient.is_ok_and(|q| (divisor * q).abs_diff_eq(&dividend, tolerance)),
                    "Left division of {dividend:?} by {divisor:?} is inconsistent"
                );
            }
            Err(_) => {
                assert_eq!(divisor.abs2(), 0.0, "Failed to divide by {divisor:?}");
            }
        }
    }
}
