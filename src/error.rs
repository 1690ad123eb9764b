//! Errors for algebraic operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    #[error("Vectors have different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize },
}

impl AlgebraError {
    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        log::debug!("Refusing to divide by zero in {operation}");
        Self::DivisionByZero { operation }
    }
}

/// Unwraps the result of an operation backing an operator that has no way of
/// returning an error, panicking with the error message like integer
/// division by zero does.
#[inline]
pub(crate) fn ok_or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}
