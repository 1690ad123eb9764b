//! Numbers and numerics.

use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    nt::Float + nt::FromPrimitive + nt::ToPrimitive + approx::AbsDiffEq + approx::RelativeEq
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const ONE_HALF: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const ONE_HALF: Self = 0.5;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Computes the remainder of `value / divisor` with the sign of the divisor
/// (floored division), so that `value == divisor * (value / divisor).floor()
/// + floored_rem(value, divisor)` up to round-off.
///
/// The divisor must be non-zero.
#[inline]
pub fn floored_rem<F: Float>(value: F, divisor: F) -> F {
    let rem = value % divisor;
    if rem != F::ZERO && (rem < F::ZERO) != (divisor < F::ZERO) {
        rem + divisor
    } else {
        rem
    }
}

/// Rounds the value to the nearest integer, with ties going to the nearest
/// even integer.
#[inline]
pub fn round_half_even<F: Float>(value: F) -> F {
    let rounded = value.round();
    if (rounded - value).abs() == F::ONE_HALF {
        // `round` sends ties away from zero, so an odd result must be pulled
        // back towards zero.
        let half = rounded * F::ONE_HALF;
        if half.fract() != F::ZERO {
            return rounded - rounded.signum();
        }
    }
    rounded
}

/// Number of fractional decimal digits needed to write any `f64` exactly.
const EXACT_FRACTION_DIGITS: i32 = 1074;

/// Rounds the value to the given number of decimal digits, with ties going
/// to the nearest even digit. A negative digit count rounds to tens,
/// hundreds and so on. With `None`, the value is rounded to an integer.
///
/// Rounding is decided on the exact decimal expansion of the value, so
/// `2.675` (stored as `2.67499...`) rounds to `2.67`. Digit counts so
/// negative that the rounding unit exceeds the value give a zero with the
/// sign of the value.
pub fn round_to_digits(value: f64, ndigits: Option<i32>) -> f64 {
    let ndigits = match ndigits {
        None | Some(0) => return round_half_even(value),
        Some(ndigits) => ndigits,
    };
    if !value.is_finite() || ndigits >= EXACT_FRACTION_DIGITS {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS as usize, value.abs());
    let Some((integer, fraction)) = exact.split_once('.') else {
        return value;
    };
    let digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes())
        .map(|byte| byte - b'0')
        .collect();

    let keep = integer.len() as i64 + i64::from(ndigits);
    let (kept, rest) = match usize::try_from(keep) {
        Ok(keep) => digits.split_at(keep.min(digits.len())),
        Err(_) => (&digits[..0], &digits[..0]),
    };
    let mut kept = kept.to_vec();

    let round_up = match rest.split_first() {
        Some((&next, tail)) => {
            next > 5
                || (next == 5
                    && (tail.iter().any(|&digit| digit != 0)
                        || kept.last().is_some_and(|&digit| digit % 2 == 1)))
        }
        None => false,
    };
    if round_up {
        increment_digits(&mut kept);
    }

    let mut rounded = String::with_capacity(kept.len() + 8);
    if value.is_sign_negative() {
        rounded.push('-');
    }
    if kept.is_empty() {
        rounded.push('0');
    }
    rounded.extend(kept.iter().map(|&digit| char::from(b'0' + digit)));
    rounded.push_str(&format!("e{}", -ndigits));

    rounded.parse().unwrap_or(value)
}

/// Adds one to the decimal number with the given digits, most significant
/// first.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use arbitrary::{Result, Unstructured};

    /// Largest magnitude of a fuzzed real number.
    pub const MAX_ARBITRARY_REAL: f64 = 1e3;

    /// Draws a real number in `[-MAX_ARBITRARY_REAL, MAX_ARBITRARY_REAL]` on
    /// a grid fine enough to hit zero and small values.
    pub fn arbitrary_real(u: &mut Unstructured<'_>) -> Result<f64> {
        let norm = f64::from(u.int_in_range(0..=2000000)?) / 1000000.0;
        Ok(MAX_ARBITRARY_REAL * (norm - 1.0))
    }
}
