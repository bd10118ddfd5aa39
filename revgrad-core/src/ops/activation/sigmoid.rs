// src/ops/activation/sigmoid.rs

use crate::autograd::context::Context;
use crate::error::RevgradError;
use crate::ops::{apply, saved_values, ScalarFunction};
use crate::scalar::Scalar;

/// Numerically stable logistic function \( \sigma(a) = 1 / (1 + e^{-a}) \).
pub(crate) fn sigmoid(a: f64) -> f64 {
    if a >= 0.0 {
        1.0 / (1.0 + (-a).exp())
    } else {
        let e = a.exp();
        e / (1.0 + e)
    }
}

/// Sigmoid activation. Saves its output \( s \); the derivative is \( s (1 - s) \).
#[derive(Debug, Clone, Copy)]
pub struct Sigmoid;

impl ScalarFunction for Sigmoid {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let out = sigmoid(inputs[0]);
        ctx.save_for_backward([out]);
        out
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError> {
        let s = saved_values(ctx, self.name(), 1)?[0];
        Ok(vec![d_output * s * (1.0 - s)])
    }
}

pub fn sigmoid_op(a: &Scalar) -> Scalar {
    apply(Sigmoid, &[a])
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
