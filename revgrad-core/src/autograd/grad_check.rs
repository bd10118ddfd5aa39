// src/autograd/grad_check.rs

use crate::error::RevgradError;
use crate::scalar::Scalar;
use thiserror::Error;

/// Default step for the central-difference approximation.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default tolerance (absolute and relative) when comparing gradients.
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(RevgradError),
}

impl From<RevgradError> for GradCheckError {
    fn from(err: RevgradError) -> Self {
        GradCheckError::BackwardPassError(err)
    }
}

/// Tunables for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step used by the central difference.
    pub epsilon: f64,
    /// A gradient passes if it is within `tolerance` of the numerical estimate,
    /// either absolutely or relatively.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: DEFAULT_EPSILON,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Evaluates `f` at `vals` with `vals[arg]` shifted by `delta`.
fn eval_shifted<F>(f: &F, vals: &[f64], arg: usize, delta: f64) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    let mut shifted = vals.to_vec();
    shifted[arg] += delta;
    f(&shifted)
}

/// Approximates \( \frac{\partial f}{\partial x_{arg}} \) at `vals` by symmetric finite differencing:
///
/// \\[ \frac{f(\ldots, x_{arg} + \epsilon, \ldots) - f(\ldots, x_{arg} - \epsilon, \ldots)}{2\epsilon} \\]
///
/// Returns `None` if `arg` is not a valid index into `vals`.
pub fn try_central_difference<F>(f: F, vals: &[f64], arg: usize, epsilon: f64) -> Option<f64>
where
    F: Fn(&[f64]) -> f64,
{
    if arg >= vals.len() {
        return None;
    }
    let f_plus = eval_shifted(&f, vals, arg, epsilon);
    let f_minus = eval_shifted(&f, vals, arg, -epsilon);
    Some((f_plus - f_minus) / (2.0 * epsilon))
}

/// Central-difference estimate of the partial derivative of `f` with respect to `vals[arg]`.
///
/// A pure numerical utility, independent of the autodiff engine; it is used to validate
/// backward rules.
///
/// # Panics
/// If `arg >= vals.len()`. Use [`try_central_difference`] to handle that case.
pub fn central_difference<F>(f: F, vals: &[f64], arg: usize, epsilon: f64) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    match try_central_difference(f, vals, arg, epsilon) {
        Some(d) => d,
        None => panic!(
            "central_difference: arg {} out of range for {} value(s)",
            arg,
            vals.len()
        ),
    }
}

/// Checks the derivatives computed by backpropagation against central differences.
///
/// One leaf `Scalar` is built per entry of `vals`; `f` is evaluated on them and
/// backpropagated with a seed of `1.0`. Each leaf's derivative (zero if no path reached
/// it) is then compared with the central-difference estimate obtained by evaluating `f`
/// on constants, which runs the same operations without gradient tracking.
pub fn check_grad<F>(f: F, vals: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    let leaves: Vec<Scalar> = vals.iter().map(|&v| Scalar::new(v)).collect();
    let output = f(&leaves);
    output.backward()?;

    let eval_constants = |xs: &[f64]| {
        let constants: Vec<Scalar> = xs.iter().map(|&v| Scalar::constant(v)).collect();
        f(&constants).value()
    };

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.derivative().unwrap_or(0.0);
        let numerical_grad = central_difference(&eval_constants, vals, i, config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus: eval_shifted(&eval_constants, vals, i, config.epsilon),
                value_minus: eval_shifted(&eval_constants, vals, i, -config.epsilon),
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let within_tolerance = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        );
        if !within_tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
