// src/ops/arithmetic/inv.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, saved_values, ScalarFunction};
use crate::scalar::Scalar;

/// Reciprocal \( z = 1 / a \).
///
/// Follows IEEE semantics: `inv(0.0)` is infinite and its derivative is not finite.
#[derive(Debug, Clone, Copy)]
pub struct Inv;

impl ScalarFunction for Inv {
    fn name(&self) -> &'static str {
        "inv"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let a = inputs[0];
        ctx.save_for_backward([a]);
        1.0 / a
    }

    /// \( \frac{dz}{da} = -\frac{1}{a^2} \)
    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        let a = saved_values(ctx, self.name(), 1)?[0];
        Ok(vec![-d_output / (a * a)])
    }
}

pub fn inv_op(a: &Scalar) -> Scalar {
    apply(Inv, &[a])
}

#[cfg(test)]
#[path = "inv_test.rs"]
mod tests;
