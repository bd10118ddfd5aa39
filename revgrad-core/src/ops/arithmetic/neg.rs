// src/ops/arithmetic/neg.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, ScalarFunction};
use crate::scalar::Scalar;

/// Negation \( z = -a \).
#[derive(Debug, Clone, Copy)]
pub struct Neg;

impl ScalarFunction for Neg {
    fn name(&self) -> &'static str {
        "neg"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        -inputs[0]
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        Ok(vec![-d_output])
    }
}

pub fn neg_op(a: &Scalar) -> Scalar {
    apply(Neg, &[a])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
