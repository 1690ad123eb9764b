//! Quaternions and variable-length vectors.
//!
//! [`Quaternion`] arithmetic mixes freely with real (`f64`) and complex
//! ([`Complex64`]) operands on either side of an operator. [`Vector`] holds
//! any element type with the basic arithmetic operations, including
//! quaternions.

#[macro_use]
mod macros;

pub mod error;
pub mod num;
pub mod operand;
pub mod quaternion;
pub mod vector;

pub use error::{AlgebraError, Result};
pub use num::Float;
pub use num_complex::Complex64;
pub use operand::Operand;
pub use quaternion::Quaternion;
pub use vector::{ElementDisplay, RealVector, Vector, VectorElement};
