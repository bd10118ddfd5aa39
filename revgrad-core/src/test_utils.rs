// src/test_utils.rs
//
// Instrumented `Variable` used by the engine's unit tests. Each derived node scales the
// incoming derivative by a fixed factor per parent, and every call into the
// capability set is recorded so tests can assert what the engine touched.

use crate::autograd::variable::{next_variable_id, Variable, VariableId};
use crate::error::RevgradError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MockKind {
    Leaf,
    Constant,
    Derived,
    /// Derived node whose `chain_rule` always fails.
    Failing,
}

#[derive(Debug)]
pub(crate) struct MockNode {
    id: VariableId,
    kind: MockKind,
    /// (parent, local partial derivative) in input order.
    inputs: Vec<(MockVar, f64)>,
    accumulated: Mutex<Vec<f64>>,
    parents_calls: AtomicUsize,
    chain_rule_calls: AtomicUsize,
}

#[derive(Debug, Clone)]
pub(crate) struct MockVar(Arc<MockNode>);

impl MockVar {
    fn build(kind: MockKind, inputs: Vec<(MockVar, f64)>) -> Self {
        MockVar(Arc::new(MockNode {
            id: next_variable_id(),
            kind,
            inputs,
            accumulated: Mutex::new(Vec::new()),
            parents_calls: AtomicUsize::new(0),
            chain_rule_calls: AtomicUsize::new(0),
        }))
    }

    pub(crate) fn leaf() -> Self {
        Self::build(MockKind::Leaf, Vec::new())
    }

    pub(crate) fn constant() -> Self {
        Self::build(MockKind::Constant, Vec::new())
    }

    /// A constant that (incorrectly) carries inputs, to prove they are never explored.
    pub(crate) fn constant_with_hidden_inputs(inputs: Vec<(MockVar, f64)>) -> Self {
        Self::build(MockKind::Constant, inputs)
    }

    pub(crate) fn derived(inputs: Vec<(MockVar, f64)>) -> Self {
        Self::build(MockKind::Derived, inputs)
    }

    pub(crate) fn failing() -> Self {
        Self::build(MockKind::Failing, Vec::new())
    }

    /// Every value passed to `accumulate_derivative`, in call order.
    pub(crate) fn accumulated(&self) -> Vec<f64> {
        self.0.accumulated.lock().unwrap().clone()
    }

    pub(crate) fn total(&self) -> f64 {
        self.accumulated().iter().sum()
    }

    pub(crate) fn parents_calls(&self) -> usize {
        self.0.parents_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn chain_rule_calls(&self) -> usize {
        self.0.chain_rule_calls.load(Ordering::SeqCst)
    }
}

impl Variable for MockVar {
    type Derivative = f64;

    fn unique_id(&self) -> VariableId {
        self.0.id
    }

    fn is_leaf(&self) -> bool {
        self.0.kind == MockKind::Leaf
    }

    fn is_constant(&self) -> bool {
        self.0.kind == MockKind::Constant
    }

    fn parents(&self) -> Vec<Self> {
        self.0.parents_calls.fetch_add(1, Ordering::SeqCst);
        self.0.inputs.iter().map(|(p, _)| p.clone()).collect()
    }

    fn chain_rule(&self, d_output: &f64) -> Result<Vec<(Self, f64)>, RevgradError> {
        self.0.chain_rule_calls.fetch_add(1, Ordering::SeqCst);
        if self.0.kind == MockKind::Failing {
            return Err(RevgradError::MissingSavedValues {
                operation: "failing".to_string(),
                expected: 1,
                actual: 0,
            });
        }
        if self.0.kind != MockKind::Derived {
            return Err(RevgradError::MissingHistory { id: self.0.id });
        }
        Ok(self
            .0
            .inputs
            .iter()
            .map(|(p, local)| (p.clone(), d_output * local))
            .collect())
    }

    fn accumulate_derivative(&self, x: f64) -> Result<(), RevgradError> {
        self.0.accumulated.lock().unwrap().push(x);
        Ok(())
    }
}

/// Position of `var` in `order`, panicking if absent.
pub(crate) fn position_of(order: &[MockVar], var: &MockVar) -> usize {
    order
        .iter()
        .position(|v| v.unique_id() == var.unique_id())
        .unwrap_or_else(|| panic!("variable {} missing from order", var.unique_id()))
}
