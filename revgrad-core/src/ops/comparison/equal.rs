// src/ops/comparison/equal.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// Equality comparison, `1.0` if \( a = b \) else `0.0`. Zero derivative.
#[derive(Debug, Clone, Copy)]
pub struct Equal;

impl ScalarFunction for Equal {
    fn name(&self) -> &'static str {
        "eq"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        if inputs[0] == inputs[1] {
            1.0
        } else {
            0.0
        }
    }

    fn backward(&self, _ctx: &Context<f64>, _d_output: f64) -> Result<Vec<f64>, RevgradError> {
        Ok(vec![0.0, 0.0])
    }
}

pub fn eq_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Equal, &[a, b])
}

#[cfg(test)]
#[path = "equal_test.rs"]
mod tests;
