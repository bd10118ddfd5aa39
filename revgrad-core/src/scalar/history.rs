// src/scalar/history.rs

use crate::autograd::context::Context;
use crate::ops::ScalarFunction;
use crate::scalar::Scalar;
use std::sync::Arc;

/// Record of how a scalar was produced.
///
/// Leaves carry an empty history (no function, no inputs). Derived scalars carry the
/// function that produced them, the `Context` it filled during the forward pass and
/// the inputs it consumed, in order.
#[derive(Debug)]
pub struct History {
    pub(crate) last_fn: Option<Arc<dyn ScalarFunction>>,
    pub(crate) ctx: Context<f64>,
    pub(crate) inputs: Vec<Scalar>,
}

impl History {
    /// History of a user-created leaf.
    pub fn leaf() -> Self {
        History {
            last_fn: None,
            ctx: Context::default(),
            inputs: Vec::new(),
        }
    }

    pub(crate) fn new(last_fn: Arc<dyn ScalarFunction>, ctx: Context<f64>, inputs: Vec<Scalar>) -> Self {
        History {
            last_fn: Some(last_fn),
            ctx,
            inputs,
        }
    }

    /// Name of the producing function, `None` for leaves.
    pub fn function_name(&self) -> Option<&'static str> {
        self.last_fn.as_ref().map(|f| f.name())
    }

    pub fn context(&self) -> &Context<f64> {
        &self.ctx
    }

    pub fn inputs(&self) -> &[Scalar] {
        &self.inputs
    }
}
