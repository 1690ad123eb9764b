//! Operands accepted by quaternion arithmetic.

use crate::quaternion::Quaternion;
use num_complex::Complex64;

/// A number that can appear on either side of a quaternion operator.
///
/// Every quaternion operator converts its other operand into this type and
/// matches on it exhaustively, so adding a variant forces every operator to
/// handle it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Real(f64),
    Complex(Complex64),
    Quaternion(Quaternion),
}

impl Operand {
    /// Embeds the operand in the quaternions. A real `x` becomes `(x, 0, 0,
    /// 0)` and a complex `a + bi` becomes `(a, b, 0, 0)`.
    #[inline]
    pub fn to_quaternion(self) -> Quaternion {
        match self {
            Self::Real(value) => Quaternion::from_real(value),
            Self::Complex(value) => Quaternion::from_complex(value),
            Self::Quaternion(value) => value,
        }
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for Operand {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<i32> for Operand {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<Complex64> for Operand {
    #[inline]
    fn from(value: Complex64) -> Self {
        Self::Complex(value)
    }
}

impl From<Quaternion> for Operand {
    #[inline]
    fn from(value: Quaternion) -> Self {
        Self::Quaternion(value)
    }
}

impl From<&Quaternion> for Operand {
    #[inline]
    fn from(value: &Quaternion) -> Self {
        Self::Quaternion(*value)
    }
}
