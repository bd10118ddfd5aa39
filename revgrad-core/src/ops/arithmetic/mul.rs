// src/ops/arithmetic/mul.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, saved_values, ScalarFunction};
use crate::scalar::Scalar;

/// Scalar multiplication \( z = a \cdot b \).
///
/// Saves both operands: each one's derivative is the other operand.
#[derive(Debug, Clone, Copy)]
pub struct Mul;

impl ScalarFunction for Mul {
    fn name(&self) -> &'static str {
        "mul"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let (a, b) = (inputs[0], inputs[1]);
        ctx.save_for_backward([a, b]);
        a * b
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        let saved = saved_values(ctx, self.name(), 2)?;
        let (a, b) = (saved[0], saved[1]);
        // grad_a = grad_output * b, grad_b = grad_output * a
        Ok(vec![d_output * b, d_output * a])
    }
}

/// Multiplies two scalars.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Mul, &[a, b])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
