// src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{inv_op, mul_op};
use crate::scalar::Scalar;

/// Division, composed as `a * inv(b)`.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    mul_op(a, &inv_op(b))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
