// src/ops/comparison/lt.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// Less-than comparison, `1.0` if \( a < b \) else `0.0`.
///
/// Piecewise constant, so both derivatives are zero.
#[derive(Debug, Clone, Copy)]
pub struct Lt;

impl ScalarFunction for Lt {
    fn name(&self) -> &'static str {
        "lt"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        if inputs[0] < inputs[1] {
            1.0
        } else {
            0.0
        }
    }

    fn backward(&self, _ctx: &Context<f64>, _d_output: f64) -> Result<Vec<f64>, RevgradError> {
        Ok(vec![0.0, 0.0])
    }
}

pub fn lt_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Lt, &[a, b])
}

#[cfg(test)]
#[path = "lt_test.rs"]
mod tests;
