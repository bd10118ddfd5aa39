// src/ops/math_elem/exp.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, saved_values, ScalarFunction};
use crate::scalar::Scalar;

/// Exponential \( z = e^a \). Saves the output, which is also its own derivative.
#[derive(Debug, Clone, Copy)]
pub struct Exp;

impl ScalarFunction for Exp {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let out = inputs[0].exp();
        ctx.save_for_backward([out]);
        out
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        let out = saved_values(ctx, self.name(), 1)?[0];
        Ok(vec![d_output * out])
    }
}

pub fn exp_op(a: &Scalar) -> Scalar {
    apply(Exp, &[a])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
