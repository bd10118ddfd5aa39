// src/ops/arithmetic/add.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// Scalar addition \( z = a + b \).
#[derive(Debug, Clone, Copy)]
pub struct Add;

impl ScalarFunction for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        inputs[0] + inputs[1]
    }

    /// \( \frac{\partial z}{\partial a} = \frac{\partial z}{\partial b} = 1 \), so the
    /// upstream derivative passes through unchanged to both inputs.
    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        Ok(vec![d_output, d_output])
    }
}

/// Adds two scalars.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Add, &[a, b])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
