// src/scalar/mod.rs

//! Reference implementation of the [`Variable`] capability set for `f64` values.

use crate::autograd::backward::backpropagate;
use crate::autograd::variable::{next_variable_id, Variable, VariableId};
use crate::error::RevgradError;
use std::sync::{Arc, RwLock};

pub mod history;
pub use history::History;

mod debug;
mod methods;

/// Internal node data shared by every clone of a [`Scalar`].
pub(crate) struct ScalarData {
    pub(crate) id: VariableId,
    pub(crate) value: f64,
    pub(crate) name: Option<String>,
    /// `None` for constants; a `History` without function for leaves.
    /// Built once when the node is created and never mutated.
    pub(crate) history: Option<History>,
    /// The only mutable state of a node, written through `accumulate_derivative`.
    pub(crate) derivative: RwLock<Option<f64>>,
}

/// A scalar value participating in a computation graph.
///
/// `Scalar` is a cheap handle: cloning it shares the same node (same `unique_id`,
/// same stored derivative).
///
/// There are three kinds of scalars:
/// * **leaves** (`Scalar::new`), created by the user; derivatives are stored here,
/// * **constants** (`Scalar::constant`), excluded from differentiation,
/// * **derived** scalars, produced by an operation in [`crate::ops`] and carrying the
///   function, its `Context` and its inputs.
#[derive(Clone)]
pub struct Scalar {
    pub(crate) data: Arc<ScalarData>,
}

impl Scalar {
    fn build(value: f64, name: Option<String>, history: Option<History>) -> Self {
        Scalar {
            data: Arc::new(ScalarData {
                id: next_variable_id(),
                value,
                name,
                history,
                derivative: RwLock::new(None),
            }),
        }
    }

    /// Creates a leaf scalar that will receive derivatives.
    pub fn new(value: f64) -> Self {
        Self::build(value, None, Some(History::leaf()))
    }

    /// Creates a named leaf scalar. The name only appears in `Debug` output.
    pub fn named(value: f64, name: impl Into<String>) -> Self {
        Self::build(value, Some(name.into()), Some(History::leaf()))
    }

    /// Creates a constant: no history, never differentiated.
    pub fn constant(value: f64) -> Self {
        Self::build(value, None, None)
    }

    /// Creates the output of an operation. The history is attached atomically here.
    pub(crate) fn from_history(value: f64, history: History) -> Self {
        Self::build(value, None, Some(history))
    }

    pub fn value(&self) -> f64 {
        self.data.value
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn history(&self) -> Option<&History> {
        self.data.history.as_ref()
    }

    /// Returns the accumulated derivative, if any backward pass reached this leaf.
    pub fn derivative(&self) -> Option<f64> {
        match self.data.derivative.read() {
            Ok(guard) => *guard,
            Err(poisoned) => {
                log::warn!("RwLock for derivative of variable {} was poisoned. Recovering reader guard.", self.data.id);
                *poisoned.into_inner()
            }
        }
    }

    /// Resets the stored derivative to `None`.
    pub fn zero_grad(&self) {
        let mut guard = match self.data.derivative.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("RwLock for derivative of variable {} was poisoned in zero_grad. Recovering.", self.data.id);
                poisoned.into_inner()
            }
        };
        *guard = None;
    }

    /// Backpropagates from this scalar with a seed derivative of `1.0`.
    pub fn backward(&self) -> Result<(), RevgradError> {
        self.backward_with(1.0)
    }

    /// Backpropagates from this scalar with a custom seed derivative.
    pub fn backward_with(&self, d_output: f64) -> Result<(), RevgradError> {
        backpropagate(self, d_output)
    }
}

impl Variable for Scalar {
    type Derivative = f64;

    fn unique_id(&self) -> VariableId {
        self.data.id
    }

    fn is_leaf(&self) -> bool {
        matches!(&self.data.history, Some(h) if h.last_fn.is_none())
    }

    fn is_constant(&self) -> bool {
        self.data.history.is_none()
    }

    fn parents(&self) -> Vec<Self> {
        match &self.data.history {
            Some(h) => h.inputs.clone(),
            None => Vec::new(),
        }
    }

    fn chain_rule(&self, d_output: &f64) -> Result<Vec<(Self, f64)>, RevgradError> {
        let missing = || RevgradError::MissingHistory { id: self.data.id };
        let history = self.data.history.as_ref().ok_or_else(missing)?;
        let function = history.last_fn.as_ref().ok_or_else(missing)?;

        let derivatives = function.backward(&history.ctx, *d_output)?;
        if derivatives.len() != history.inputs.len() {
            return Err(RevgradError::GradientArityMismatch {
                operation: function.name().to_string(),
                expected: history.inputs.len(),
                actual: derivatives.len(),
            });
        }

        Ok(history
            .inputs
            .iter()
            .cloned()
            .zip(derivatives)
            .filter(|(input, _)| !input.is_constant())
            .collect())
    }

    fn accumulate_derivative(&self, x: f64) -> Result<(), RevgradError> {
        if !self.is_leaf() {
            return Err(RevgradError::NonLeafAccumulation { id: self.data.id });
        }
        let mut guard = self.data.derivative.write().map_err(|_| {
            RevgradError::LockPoisoned(format!(
                "failed to acquire write lock on derivative of variable {}",
                self.data.id
            ))
        })?;
        *guard = Some(guard.unwrap_or(0.0) + x);
        Ok(())
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
