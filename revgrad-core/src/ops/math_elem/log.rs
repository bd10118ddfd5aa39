// src/ops/math_elem/log.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, saved_values, ScalarFunction};
use crate::scalar::Scalar;

/// Natural logarithm \( z = \ln(a) \).
///
/// Stores the input, as the gradient is \( 1 / a \).
///
/// # Domain Considerations
/// Non-positive inputs follow IEEE semantics (`-inf` at zero, `NaN` below), and so
/// does the derivative.
#[derive(Debug, Clone, Copy)]
pub struct Log;

impl ScalarFunction for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let a = inputs[0];
        ctx.save_for_backward([a]);
        a.ln()
    }

    /// \( \frac{dL}{da} = \frac{dL}{dz} \cdot \frac{1}{a} \)
    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        let a = saved_values(ctx, self.name(), 1)?[0];
        Ok(vec![d_output / a])
    }
}

pub fn log_op(a: &Scalar) -> Scalar {
    apply(Log, &[a])
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
