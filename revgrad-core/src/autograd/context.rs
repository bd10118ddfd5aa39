// src/autograd/context.rs

/// Per-invocation storage for the values an operation's backward rule needs.
///
/// A fresh `Context` is created for every forward call of a differentiable operation,
/// then moved into the `History` of the output it produced. It is read only while
/// that output's `chain_rule` runs.
///
/// When created with `no_grad = true` (every input is a constant, so no derivative
/// will ever be requested), `save_for_backward` is a no-op and `saved_tensors`
/// stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<T> {
    no_grad: bool,
    saved_values: Vec<T>,
}

impl<T> Context<T> {
    pub fn new(no_grad: bool) -> Self {
        Context {
            no_grad,
            saved_values: Vec::new(),
        }
    }

    /// Returns `true` if gradient tracking is disabled for this context.
    pub fn no_grad(&self) -> bool {
        self.no_grad
    }

    /// Stores `values` for use during the backward pass.
    ///
    /// Calling this more than once replaces the previous snapshot (last write wins).
    pub fn save_for_backward<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        if self.no_grad {
            return;
        }
        self.saved_values = values.into_iter().collect();
    }

    /// The saved snapshot, empty if nothing was saved or saving was disabled.
    pub fn saved_tensors(&self) -> &[T] {
        &self.saved_values
    }
}

impl<T> Default for Context<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
