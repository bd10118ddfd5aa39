// src/ops/activation/relu.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, saved_values, ScalarFunction};
use crate::scalar::Scalar;

/// Rectified linear unit \( \max(0, a) \).
///
/// The derivative at exactly zero is taken as 0.
#[derive(Debug, Clone, Copy)]
pub struct Relu;

impl ScalarFunction for Relu {
    fn name(&self) -> &'static str {
        "relu"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let a = inputs[0];
        ctx.save_for_backward([a]);
        if a > 0.0 {
            a
        } else {
            0.0
        }
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        let a = saved_values(ctx, self.name(), 1)?[0];
        Ok(vec![if a > 0.0 { d_output } else { 0.0 }])
    }
}

pub fn relu_op(a: &Scalar) -> Scalar {
    apply(Relu, &[a])
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
