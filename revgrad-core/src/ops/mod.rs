//! # Scalar Operations Module (`ops`)
//!
//! Differentiable operations over [`Scalar`]s, grouped by functionality.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a public function (`add_op`, `log_op`, ...)
//!   that computes the forward value and, when any input needs gradients, attaches a
//!   [`History`] to the output.
//! - **Function structs:** each operation has a zero-sized struct (`Add`, `Log`, ...)
//!   implementing [`ScalarFunction`]: the forward rule, which stashes what it needs in a
//!   [`Context`], and the analytic backward rule, which reads it back.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, inv and the composites sub, div.
//! - [`math_elem`]: log, exp.
//! - [`activation`]: sigmoid, relu.
//! - [`comparison`]: lt, eq (zero derivative).

use crate::autograd::context::Context;
use crate::autograd::variable::Variable;
use crate::error::RevgradError;
use crate::scalar::{History, Scalar};
use std::fmt::Debug;
use std::sync::Arc;

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op};
pub use arithmetic::{add_op, div_op, inv_op, mul_op, neg_op, sub_op};
pub use comparison::{eq_op, lt_op};
pub use math_elem::{exp_op, log_op};

/// Forward and backward rules of a differentiable scalar operation.
///
/// The `Debug + Send + Sync` bounds let the function be shared through the `Arc`
/// stored in an output's [`History`].
pub trait ScalarFunction: Debug + Send + Sync {
    /// Operation name, used in errors and debug output.
    fn name(&self) -> &'static str;

    /// Computes the output value from the input values, saving into `ctx` whatever
    /// `backward` will need.
    ///
    /// `inputs` must hold exactly one value per operand of the operation (one for
    /// unary functions, two for binary ones). [`apply`] guarantees this; direct callers
    /// passing fewer values make `forward` panic on indexing.
    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64;

    /// Given the derivative flowing into the output, returns one derivative per input,
    /// in input order.
    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, RevgradError>;
}

/// Runs `function` forward on `inputs` and builds the output scalar.
///
/// A fresh `Context` is created for the call, with `no_grad` set when every input is a
/// constant. In that case the output is itself a constant; otherwise it receives a
/// `History` holding the function, the context and the inputs.
pub fn apply<F>(function: F, inputs: &[&Scalar]) -> Scalar
where
    F: ScalarFunction + 'static,
{
    let values: Vec<f64> = inputs.iter().map(|s| s.value()).collect();
    let need_grad = inputs.iter().any(|s| !s.is_constant());

    let mut ctx = Context::new(!need_grad);
    let value = function.forward(&mut ctx, &values);

    if !need_grad {
        return Scalar::constant(value);
    }
    let history = History::new(
        Arc::new(function),
        ctx,
        inputs.iter().map(|s| (*s).clone()).collect(),
    );
    Scalar::from_history(value, history)
}

/// Reads the first `expected` saved values of `ctx`, failing if fewer were saved.
pub(crate) fn saved_values<'a>(
    ctx: &'a Context<f64>,
    operation: &str,
    expected: usize,
) -> Result<&'a [f64], RevgradError> {
    let saved = ctx.saved_tensors();
    if saved.len() < expected {
        return Err(RevgradError::MissingSavedValues {
            operation: operation.to_string(),
            expected,
            actual: saved.len(),
        });
    }
    Ok(&saved[..expected])
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
