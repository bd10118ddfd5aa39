// src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::scalar::Scalar;

/// Subtraction, composed as `a + (-b)`; its derivative comes from `Add` and `Neg`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
