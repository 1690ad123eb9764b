//! Vectors of arbitrary length.

use crate::{
    error::{self, AlgebraError, Result},
    num::Float,
    quaternion::Quaternion,
};
use approx::{AbsDiffEq, RelativeEq};
use num_complex::Complex64;
use num_traits::Zero;
use std::{
    fmt,
    ops::{Add, Div, Index, IndexMut, Mul, Neg, RangeBounds, Sub},
    slice::{self, SliceIndex},
    vec,
};

/// Operations a type must support to be the element of a [`Vector`].
///
/// Implemented for every type with the required arithmetic, including
/// `f32`, `f64` and [`Quaternion`].
pub trait VectorElement:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> VectorElement for T where
    T: Clone
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + Zero
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + Neg<Output = Self>
{
}

/// Writes a single element of a [`Vector`] in its `Display` form.
///
/// Floats are written with their `Debug` form so that a decimal point is
/// always present, matching how [`Quaternion`] writes its components.
pub trait ElementDisplay {
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_element_display {
    (debug => $($ty:ty),*) => {
        $(
            impl ElementDisplay for $ty {
                fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{self:?}")
                }
            }
        )*
    };
    (display => $($ty:ty),*) => {
        $(
            impl ElementDisplay for $ty {
                fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{self}")
                }
            }
        )*
    };
}

impl_element_display!(debug => f32, f64);
impl_element_display!(display => i8, i16, i32, i64, i128, isize, Complex64, Quaternion);

/// An ordered sequence of elements supporting the vector space operations.
///
/// The length is only known at runtime. Adding or subtracting vectors of
/// different lengths is allowed: the elements past the end of the shorter
/// vector are taken from the longer one (negated if it is the subtrahend).
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, PartialEq)]
pub struct Vector<T> {
    values: Vec<T>,
}

/// A vector of real numbers.
pub type RealVector = Vector<f64>;

impl<T> Vector<T> {
    /// Creates a vector holding the given values.
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    /// Replaces the elements in the given range with the given values,
    /// which may be more or fewer than the replaced ones. Returns the
    /// removed elements.
    ///
    /// # Panics
    /// If the range is out of bounds.
    pub fn splice<R, I>(&mut self, range: R, replace_with: I) -> Vec<T>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        self.values.splice(range, replace_with).collect()
    }
}

impl<T: VectorElement> Vector<T> {
    /// Whether the vector is empty or all its elements are zero.
    pub fn is_zero_vector(&self) -> bool {
        self.values.iter().all(T::is_zero)
    }

    /// Computes the dot product with the given vector.
    ///
    /// Returns [`None`] if both vectors are empty.
    ///
    /// # Errors
    /// Returns [`AlgebraError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn dot(&self, other: &Self) -> Result<Option<T>> {
        if self.len() != other.len() {
            return Err(AlgebraError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(product_sum(&self.values, &other.values))
    }

    /// Computes the dot product of the vector with itself, or [`None`] if it
    /// is empty.
    pub fn abs2(&self) -> Option<T> {
        product_sum(&self.values, &self.values)
    }

    /// Whether the dot product with the given vector is zero. Empty vectors
    /// are never orthogonal.
    ///
    /// # Errors
    /// Returns [`AlgebraError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool> {
        Ok(self.dot(other)?.is_some_and(|dot| dot.is_zero()))
    }

    /// Whether each element is the corresponding element of the given vector
    /// times one common factor. Zero vectors and vectors of different length
    /// are never parallel.
    pub fn is_parallel(&self, other: &Self) -> bool {
        if self.is_zero_vector() || other.is_zero_vector() || self.len() != other.len() {
            return false;
        }

        let mut factor = None;

        for (value, other_value) in self.values.iter().zip(&other.values) {
            match (value.is_zero(), other_value.is_zero()) {
                (true, true) => {}
                (true, false) | (false, true) => return false,
                (false, false) => {
                    let ratio = value.clone() / other_value.clone();
                    if *factor.get_or_insert_with(|| ratio.clone()) != ratio {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Computes the elementwise sum. If the other vector is longer, its
    /// trailing elements are appended as they are.
    pub fn added(&self, other: &Self) -> Self {
        if self.len() < other.len() {
            return other.added(self);
        }
        let mut values: Vec<T> = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(value, other_value)| value.clone() + other_value.clone())
            .collect();
        values.extend_from_slice(&self.values[other.len()..]);
        Self::new(values)
    }

    /// Computes the elementwise difference. If the other vector is longer,
    /// its trailing elements are appended negated.
    pub fn subtracted(&self, other: &Self) -> Self {
        let mut values: Vec<T> = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(value, other_value)| value.clone() - other_value.clone())
            .collect();
        values.extend(self.values.iter().skip(other.len()).cloned());
        values.extend(other.values.iter().skip(self.len()).map(|value| -value.clone()));
        Self::new(values)
    }

    /// Multiplies every element by the given factor from the right.
    pub fn scaled(&self, factor: &T) -> Self {
        self.mapped(|value| value.clone() * factor.clone())
    }

    /// Multiplies every element by the given factor from the left.
    pub fn premultiplied(&self, factor: &T) -> Self {
        self.mapped(|value| factor.clone() * value.clone())
    }

    /// Divides every element by the given divisor.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the divisor is zero.
    pub fn try_div(&self, divisor: &T) -> Result<Self> {
        if divisor.is_zero() {
            return Err(AlgebraError::division_by_zero("vector division"));
        }
        Ok(self.mapped(|value| value.clone() / divisor.clone()))
    }

    pub fn negated(&self) -> Self {
        self.mapped(|value| -value.clone())
    }

    fn mapped(&self, f: impl FnMut(&T) -> T) -> Self {
        self.values.iter().map(f).collect()
    }
}

impl<F: Float + VectorElement> Vector<F> {
    /// Computes the Euclidean length, which is zero for an empty vector.
    ///
    /// The elements are divided by the largest absolute element before
    /// squaring, so the result only overflows when the length itself does.
    pub fn magnitude(&self) -> F {
        let (scale, unit) = self.split_scale();
        unit.abs2().map_or(F::ZERO, |abs2| scale * abs2.sqrt())
    }

    /// Computes the vector divided by its magnitude.
    ///
    /// # Errors
    /// Returns [`AlgebraError::DivisionByZero`] if the magnitude is zero.
    pub fn normalized(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == F::ZERO {
            return Err(AlgebraError::division_by_zero("vector normalization"));
        }
        self.try_div(&magnitude)
    }

    /// Computes the angle in radians between the vector and the given vector.
    ///
    /// # Errors
    /// - [`AlgebraError::LengthMismatch`] if the vectors have different
    ///   lengths.
    /// - [`AlgebraError::DivisionByZero`] if either vector has zero
    ///   magnitude.
    pub fn angle(&self, other: &Self) -> Result<F> {
        let (_, unit) = self.split_scale();
        let (_, other_unit) = other.split_scale();

        let dot = unit.dot(&other_unit)?;
        let magnitudes = unit.magnitude() * other_unit.magnitude();

        let dot = match dot {
            Some(dot) if magnitudes != F::ZERO => dot,
            _ => return Err(AlgebraError::division_by_zero("vector angle")),
        };

        // NaN (from non-finite elements) must pass through unclamped
        let cosine = dot / magnitudes;
        let clamped = if cosine > F::ONE {
            F::ONE
        } else if cosine < F::NEG_ONE {
            F::NEG_ONE
        } else {
            cosine
        };
        if clamped != cosine && !cosine.is_nan() {
            log::trace!("Clamped angle cosine {cosine:?} to {clamped:?}");
        }
        Ok(clamped.acos())
    }

    /// Computes the projection of the given vector onto this vector.
    ///
    /// # Errors
    /// - [`AlgebraError::LengthMismatch`] if the vectors have different
    ///   lengths.
    /// - [`AlgebraError::DivisionByZero`] if this vector has zero magnitude.
    pub fn project(&self, other: &Self) -> Result<Self> {
        let (_, unit) = self.split_scale();
        let (other_scale, other_unit) = other.split_scale();
        match (other_unit.dot(&unit)?, unit.abs2()) {
            (Some(dot), Some(abs2)) if abs2 != F::ZERO => {
                Ok(unit.scaled(&(dot / abs2 * other_scale)))
            }
            _ => Err(AlgebraError::division_by_zero("vector projection")),
        }
    }

    /// Splits the vector into its largest absolute element and the vector
    /// divided by that element. Zero and non-finite scales are replaced by
    /// one, leaving the vector as is.
    fn split_scale(&self) -> (F, Self) {
        let scale = self
            .values
            .iter()
            .fold(F::ZERO, |max, value| max.max(value.abs()));
        if scale == F::ZERO || !scale.is_finite() {
            (F::ONE, self.clone())
        } else {
            (scale, self.mapped(|value| *value / scale))
        }
    }
}

impl RealVector {
    /// Creates a real vector, converting each value to `f64`.
    pub fn from_reals<I, X>(values: I) -> Self
    where
        I: IntoIterator<Item = X>,
        X: Into<f64>,
    {
        values.into_iter().map(Into::into).collect()
    }
}

fn product_sum<T: VectorElement>(a: &[T], b: &[T]) -> Option<T> {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.clone() * y.clone())
        .reduce(|sum, product| sum + product)
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self::new(values.into())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(vector: Vector<T>) -> Self {
        vector.values
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.values[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl_binop!([T: VectorElement], Add, add, Vector<T>, Vector<T>, Vector<T>, |a, b| {
    a.added(b)
});

impl_binop!([T: VectorElement], Sub, sub, Vector<T>, Vector<T>, Vector<T>, |a, b| {
    a.subtracted(b)
});

impl_binop!([T: VectorElement], Mul, mul, Vector<T>, T, Vector<T>, |a, b| {
    a.scaled(b)
});

impl_binop!([T: VectorElement], Div, div, Vector<T>, T, Vector<T>, |a, b| {
    error::ok_or_panic(a.try_div(b))
});

impl_binop!(Mul, mul, f32, Vector<f32>, Vector<f32>, |a, b| {
    b.premultiplied(a)
});

impl_binop!(Mul, mul, f64, Vector<f64>, Vector<f64>, |a, b| {
    b.premultiplied(a)
});

impl_binop!(Mul, mul, Quaternion, Vector<Quaternion>, Vector<Quaternion>, |a, b| {
    b.premultiplied(a)
});

impl_unary_op!([T: VectorElement], Neg, neg, Vector<T>, Vector<T>, |v| {
    v.negated()
});

impl<T> AbsDiffEq for Vector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T> RelativeEq for Vector<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T: ElementDisplay> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            value.fmt_element(f)?;
        }
        write!(f, ")")
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use crate::num::fuzzing::arbitrary_real;
    use arbitrary::{Arbitrary, Unstructured};

    const MAX_LEN: usize = 16;

    #[derive(Clone, Debug)]
    pub struct ArbitraryRealVector(pub RealVector);

    impl Arbitrary<'_> for ArbitraryRealVector {
        fn arbitrary(u: &mut Unstructured<'_>) -> arbitrary::Result<Self> {
            let len = u.int_in_range(0..=MAX_LEN)?;
            let values = (0..len)
                .map(|_| arbitrary_real(u))
                .collect::<arbitrary::Result<Vec<_>>>()?;
            Ok(Self(Vector::new(values)))
        }
    }

    pub fn fuzz_test_vector_arithmetic((a, b): (ArbitraryRealVector, ArbitraryRealVector)) {
        let (a, b) = (a.0, b.0);
        let max_len = a.len().max(b.len());

        let sum = &a + &b;
        let difference = &a - &b;
        assert_eq!(sum.len(), max_len);
        assert_eq!(difference.len(), max_len);
        assert_eq!(sum, &b + &a, "Addition of {a:?} and {b:?} is not commutative");

        let restored = &sum - &b;
        for (idx, value) in restored.iter().enumerate() {
            let expected = a.values().get(idx).copied().unwrap_or(0.0);
            assert!(
                value.abs_diff_eq(&expected, 1e-9),
                "({a:?} + {b:?}) - {b:?} gave {restored:?}"
            );
        }

        match a.dot(&b) {
            Ok(dot) => {
                assert_eq!(a.len(), b.len());
                assert_eq!(dot.is_none(), a.is_empty());
            }
            Err(AlgebraError::LengthMismatch { left, right }) => {
                assert_eq!((left, right), (a.len(), b.len()));
                assert_ne!(left, right);
            }
            Err(error) => panic!("Unexpected dot product error: {error}"),
        }

        if let Ok(angle) = a.angle(&b) {
            assert!(
                (0.0..=std::f64::consts::PI).contains(&angle),
                "Angle {angle} between {a:?} and {b:?} out of range"
            );
        }

        assert_eq!(a.is_parallel(&a), !a.is_zero_vector());
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{real_vector, vector};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn creating_vectors_works() {
        let from_macro = vector![1.0, 2.0, 3.0];
        let from_vec = Vector::new(vec![1.0, 2.0, 3.0]);
        let from_array = Vector::from([1.0, 2.0, 3.0]);
        let from_iter: Vector<f64> = (1..=3).map(f64::from).collect();

        assert_eq!(from_macro, from_vec);
        assert_eq!(from_macro, from_array);
        assert_eq!(from_macro, from_iter);
        assert_eq!(from_macro.len(), 3);
        assert_eq!(from_macro.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn creating_real_vectors_converts_to_f64() {
        let v = RealVector::from_reals([1_i32, 2, 3]);
        assert_eq!(v, vector![1.0, 2.0, 3.0]);
        assert_eq!(real_vector![1, 2.5, 3_u8], vector![1.0, 2.5, 3.0]);
        assert_eq!(RealVector::from_reals([0.5_f32]), vector![0.5]);
    }

    #[test]
    fn empty_vector_has_zero_length() {
        let v = Vector::<f64>::default();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v, vector![]);
    }

    #[test]
    fn detecting_zero_vectors_works() {
        assert!(Vector::<f64>::default().is_zero_vector());
        assert!(vector![0.0, 0.0].is_zero_vector());
        assert!(!vector![0.0, 1.0].is_zero_vector());
        assert!(vector![Quaternion::zero()].is_zero_vector());
    }

    #[test]
    fn dot_product_works() {
        assert_eq!(vector![1.0, 0.0].dot(&vector![0.0, 1.0]), Ok(Some(0.0)));
        assert_eq!(
            vector![1.0, 2.0, 3.0].dot(&vector![4.0, -5.0, 6.0]),
            Ok(Some(12.0))
        );
    }

    #[test]
    fn dot_product_of_empty_vectors_is_absent() {
        assert_eq!(Vector::<f64>::default().dot(&vector![]), Ok(None));
        assert_eq!(Vector::<f64>::default().abs2(), None);
    }

    #[test]
    fn dot_product_of_vectors_with_different_lengths_fails() {
        assert_eq!(
            vector![1.0, 2.0].dot(&vector![1.0]),
            Err(AlgebraError::LengthMismatch { left: 2, right: 1 })
        );
        assert!(vector![1.0].is_orthogonal(&vector![1.0, 0.0]).is_err());
    }

    #[test]
    fn abs2_is_dot_product_with_self() {
        let v = vector![1.0, -2.0, 2.0];
        assert_eq!(v.abs2(), Some(9.0));
        assert_eq!(v.abs2(), v.dot(&v).unwrap());
    }

    #[test]
    fn orthogonality_works() {
        assert_eq!(vector![1.0, 0.0].is_orthogonal(&vector![0.0, 1.0]), Ok(true));
        assert_eq!(vector![1.0, 1.0].is_orthogonal(&vector![1.0, -1.0]), Ok(true));
        assert_eq!(vector![1.0, 1.0].is_orthogonal(&vector![1.0, 0.0]), Ok(false));
        assert_eq!(
            Vector::<f64>::default().is_orthogonal(&vector![]),
            Ok(false)
        );
    }

    #[test]
    fn parallel_vectors_are_detected() {
        assert!(vector![2.0, 4.0].is_parallel(&vector![1.0, 2.0]));
        assert!(vector![-3.0, 0.0, 6.0].is_parallel(&vector![1.0, 0.0, -2.0]));
        assert!(vector![1.0, 2.0].is_parallel(&vector![1.0, 2.0]));
    }

    #[test]
    fn non_parallel_vectors_are_rejected() {
        assert!(!vector![1.0, 0.0].is_parallel(&vector![0.0, 1.0]));
        assert!(!vector![1.0, 2.0].is_parallel(&vector![1.0, 3.0]));
        assert!(!vector![1.0, 2.0].is_parallel(&vector![1.0, 2.0, 0.0]));
    }

    #[test]
    fn zero_vectors_are_never_parallel() {
        assert!(!vector![0.0, 0.0].is_parallel(&vector![0.0, 0.0]));
        assert!(!vector![0.0, 0.0].is_parallel(&vector![1.0, 2.0]));
        assert!(!Vector::<f64>::default().is_parallel(&vector![]));
    }

    #[test]
    fn adding_vectors_of_equal_length_works() {
        assert_eq!(
            vector![1.0, 2.0, 3.0] + vector![4.0, 5.0, 6.0],
            vector![5.0, 7.0, 9.0]
        );
    }

    #[test]
    fn adding_vectors_of_different_lengths_adopts_tail() {
        assert_eq!(
            vector![1.0, 2.0, 3.0] + vector![1.0, 2.0],
            vector![2.0, 4.0, 3.0]
        );
        assert_eq!(
            vector![1.0, 2.0] + vector![1.0, 2.0, 3.0],
            vector![2.0, 4.0, 3.0]
        );
        assert_eq!(Vector::default() + vector![1.0], vector![1.0]);
    }

    #[test]
    fn subtracting_vectors_of_different_lengths_adopts_tail() {
        assert_eq!(
            vector![5.0, 7.0, 9.0] - vector![1.0, 2.0],
            vector![4.0, 5.0, 9.0]
        );
        assert_eq!(
            vector![1.0, 2.0] - vector![5.0, 7.0, 9.0],
            vector![-4.0, -5.0, -9.0]
        );
    }

    #[test]
    fn scalar_multiplication_works_from_both_sides() {
        let v = vector![1.0, -2.0, 3.5];
        assert_eq!(&v * 2.0, vector![2.0, -4.0, 7.0]);
        assert_eq!(2.0 * &v, vector![2.0, -4.0, 7.0]);

        let v = vector![1.0_f32, 2.0];
        assert_eq!(3.0_f32 * v.clone(), v * 3.0);
    }

    #[test]
    fn scalar_division_works() {
        let v = vector![2.0, -4.0, 7.0];
        assert_eq!(&v / 2.0, vector![1.0, -2.0, 3.5]);
        assert_eq!(v.try_div(&2.0), Ok(vector![1.0, -2.0, 3.5]));
    }

    #[test]
    fn dividing_by_zero_scalar_fails() {
        assert!(matches!(
            vector![1.0, 2.0].try_div(&0.0),
            Err(AlgebraError::DivisionByZero { .. })
        ));
    }

    #[test]
    #[should_panic]
    fn dividing_by_zero_scalar_with_operator_panics() {
        let _ = vector![1.0, 2.0] / 0.0;
    }

    #[test]
    fn negation_works() {
        let v = vector![1.0, -2.0, 0.5];
        assert_eq!(-&v, vector![-1.0, 2.0, -0.5]);
        assert_eq!(-v, vector![-1.0, 2.0, -0.5]);
    }

    #[test]
    fn indexing_works() {
        let mut v = vector![1.0, 2.0, 3.0, 4.0];
        assert_eq!(v[0], 1.0);
        assert_eq!(&v[1..3], &[2.0, 3.0]);
        assert_eq!(&v[2..], &[3.0, 4.0]);

        v[0] = 10.0;
        v[1..3].copy_from_slice(&[20.0, 30.0]);
        assert_eq!(v, vector![10.0, 20.0, 30.0, 4.0]);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let v = vector![1.0];
        let _ = v[1];
    }

    #[test]
    fn splicing_can_change_length() {
        let mut v = vector![1.0, 2.0, 3.0, 4.0];

        let removed = v.splice(1..3, [5.0, 6.0, 7.0]);
        assert_eq!(removed, vec![2.0, 3.0]);
        assert_eq!(v, vector![1.0, 5.0, 6.0, 7.0, 4.0]);

        v.splice(..4, []);
        assert_eq!(v, vector![4.0]);
    }

    #[test]
    fn iterating_works() {
        let mut v = vector![1.0, 2.0, 3.0];
        assert_eq!(v.iter().sum::<f64>(), 6.0);
        assert_eq!((&v).into_iter().count(), 3);

        for value in &mut v {
            *value *= 2.0;
        }
        assert_eq!(v.clone().into_iter().collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
        assert_eq!(Vec::from(v), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn equality_requires_equal_length_and_elements() {
        assert_eq!(vector![1.0, 2.0], vector![1.0, 2.0]);
        assert_ne!(vector![1.0, 2.0], vector![1.0, 2.0, 0.0]);
        assert_ne!(vector![1.0, 2.0], vector![1.0, 2.5]);
    }

    #[test]
    fn display_and_debug_formats_are_correct() {
        let v = vector![1.0, 2.5, -3.0];
        assert_eq!(v.to_string(), "(1.0, 2.5, -3.0)");
        assert_eq!(format!("{v:?}"), "Vector(1.0, 2.5, -3.0)");

        let empty = Vector::<f64>::default();
        assert_eq!(empty.to_string(), "()");
        assert_eq!(format!("{empty:?}"), "Vector()");

        let v = vector![Quaternion::new(1.0, 2.0, 3.0, 4.0)];
        assert_eq!(v.to_string(), "(Quaternion(r = 1.0, i = 2.0, j = 3.0, k = 4.0))");
        assert_eq!(format!("{v:?}"), "Vector(Quaternion(1.0, 2.0, 3.0, 4.0))");
    }

    #[test]
    fn real_vector_displays_integral_values_as_floats() {
        assert_eq!(real_vector![1, 2].to_string(), "(1.0, 2.0)");
        assert_eq!(vector![1_i32, -2].to_string(), "(1, -2)");
        assert_eq!(vector![1e16, 0.5].to_string(), "(1e16, 0.5)");
    }

    #[test]
    fn magnitude_works() {
        assert_eq!(vector![3.0, 4.0].magnitude(), 5.0);
        assert_eq!(Vector::<f64>::default().magnitude(), 0.0);
    }

    #[test]
    fn normalizing_gives_unit_magnitude() {
        let v = vector![3.0, 4.0].normalized().unwrap();
        assert_abs_diff_eq!(v, vector![0.6, 0.8], epsilon = 1e-12);
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
        assert!(vector![0.0, 0.0].normalized().is_err());
        assert!(Vector::<f64>::default().normalized().is_err());
    }

    #[test]
    fn angle_works() {
        assert_abs_diff_eq!(
            vector![1.0, 0.0].angle(&vector![0.0, 1.0]).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            vector![1.0, 0.0].angle(&vector![1.0, 1.0]).unwrap(),
            FRAC_PI_4,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            vector![1.0, 0.0].angle(&vector![-2.0, 0.0]).unwrap(),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn angle_of_vector_with_itself_is_zero() {
        let v = vector![0.1, 0.2, 0.3];
        assert_abs_diff_eq!(v.angle(&v).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_is_finite_for_large_and_tiny_elements() {
        let large = vector![1e200, 0.0];
        assert_abs_diff_eq!(large.angle(&large).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            large.angle(&vector![0.0, 1e200]).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            large.angle(&vector![-1e-200, 0.0]).unwrap(),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn angle_with_nan_element_is_nan() {
        let angle = vector![f64::NAN, 1.0].angle(&vector![1.0, 0.0]).unwrap();
        assert!(angle.is_nan());
    }

    #[test]
    fn magnitude_and_projection_handle_large_elements() {
        assert_abs_diff_eq!(
            vector![3e200, 4e200].magnitude(),
            5e200,
            epsilon = 1e188
        );
        assert_abs_diff_eq!(
            vector![1e200, 0.0].normalized().unwrap(),
            vector![1.0, 0.0],
            epsilon = 1e-12
        );
        let projection = vector![1e200, 0.0].project(&vector![2e200, 3e200]).unwrap();
        assert_abs_diff_eq!(projection[0], 2e200, epsilon = 1e188);
        assert_eq!(projection[1], 0.0);
    }

    #[test]
    fn angle_fails_for_zero_or_mismatched_vectors() {
        assert!(matches!(
            vector![0.0, 0.0].angle(&vector![1.0, 0.0]),
            Err(AlgebraError::DivisionByZero { .. })
        ));
        assert!(matches!(
            vector![1.0].angle(&vector![1.0, 0.0]),
            Err(AlgebraError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn projection_works() {
        assert_abs_diff_eq!(
            vector![3.0, 0.0].project(&vector![1.0, 1.0]).unwrap(),
            vector![1.0, 0.0],
            epsilon = 1e-12
        );
        assert!(vector![0.0, 0.0].project(&vector![1.0, 1.0]).is_err());
        assert!(vector![1.0, 0.0].project(&vector![1.0]).is_err());
    }

    #[test]
    fn quaternion_vectors_support_vector_operations() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        let v = vector![i, j];
        let w = vector![j, k];

        assert_eq!(&v + &w, vector![i + j, j + k]);
        assert_eq!(v.dot(&w), Ok(Some(i * j + j * k)));
        assert_eq!(v.abs2(), Some(Quaternion::from_real(-2.0)));
        assert!(v.is_parallel(&v));
    }

    #[test]
    fn multiplying_quaternion_vector_respects_side() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        let v = vector![j];
        assert_eq!(i * &v, vector![k]);
        assert_eq!(&v * i, vector![-k]);
    }

    prop_compose! {
        fn real_vector_strategy(max_len: usize)(
            values in prop::collection::vec(-1e3..1e3, 0..=max_len)
        ) -> RealVector {
            Vector::new(values)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]

        #[test]
        fn sum_has_length_of_longer_vector(
            a in real_vector_strategy(6),
            b in real_vector_strategy(6),
        ) {
            prop_assert_eq!((&a + &b).len(), a.len().max(b.len()));
            prop_assert_eq!((&a - &b).len(), a.len().max(b.len()));
        }

        #[test]
        fn addition_is_commutative(
            a in real_vector_strategy(6),
            b in real_vector_strategy(6),
        ) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn subtracting_self_gives_zero_vector(a in real_vector_strategy(6)) {
            prop_assert!((&a - &a).is_zero_vector());
        }

        #[test]
        fn difference_is_sum_with_negation(
            a in real_vector_strategy(6),
            b in real_vector_strategy(6),
        ) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn dot_product_is_symmetric(
            a in real_vector_strategy(6),
            b in real_vector_strategy(6),
        ) {
            prop_assume!(a.len() == b.len());
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }

        #[test]
        fn non_zero_vector_is_parallel_to_itself(a in real_vector_strategy(6)) {
            prop_assume!(!a.is_zero_vector());
            prop_assert!(a.is_parallel(&a));
            prop_assert!(!a.is_parallel(&Vector::new(vec![0.0; a.len()])));
        }

        #[test]
        fn normalized_vector_has_unit_magnitude(a in real_vector_strategy(6)) {
            prop_assume!(a.magnitude() > 1e-3);
            assert_abs_diff_eq!(a.normalized().unwrap().magnitude(), 1.0, epsilon = 1e-9);
        }
    }
}
