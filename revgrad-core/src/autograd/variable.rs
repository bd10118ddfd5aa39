// src/autograd/variable.rs

use crate::error::RevgradError;
use num_traits::Zero;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stable identity of a node in the computation graph.
///
/// Only used for deduplication and bookkeeping during a backward pass, never for arithmetic.
pub type VariableId = usize;

static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(1);

/// Allocates a fresh `VariableId`.
///
/// Ids are strictly increasing for the lifetime of the process and never reused.
pub fn next_variable_id() -> VariableId {
    NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed)
}

/// The capability set every node of the computation graph must provide.
///
/// The traversal (`topological_sort`) and the backward sweep (`backpropagate`) are
/// free functions generic over this trait. They only ever talk to the graph through
/// these methods, so any numeric type (scalars, tensors, ...) can plug into the engine
/// by implementing it.
///
/// Implementors are cheap handles: `Clone` must not copy the node, only the reference
/// to it, since the engine clones parents freely while walking the graph.
pub trait Variable: Clone {
    /// Type of the derivative flowing through the graph. `Zero` gives the
    /// accumulator its default value and `Add` (through `Zero`) sums contributions.
    type Derivative: Clone + Zero + Debug;

    /// Identity assigned once at creation.
    fn unique_id(&self) -> VariableId;

    /// True iff the variable was created directly by the user (no producing operation).
    /// Leaves are where derivatives are stored permanently.
    fn is_leaf(&self) -> bool;

    /// True iff the variable has no history at all. Constants are excluded from
    /// differentiation: they never receive nor redistribute a derivative.
    fn is_constant(&self) -> bool;

    /// Inputs consumed by the operation that produced this variable, in order.
    /// Empty for leaves and constants.
    fn parents(&self) -> Vec<Self>;

    /// Applies the local chain rule: given the derivative flowing into this node,
    /// returns one `(parent, contribution)` pair per differentiable parent.
    fn chain_rule(
        &self,
        d_output: &Self::Derivative,
    ) -> Result<Vec<(Self, Self::Derivative)>, RevgradError>;

    /// Adds `x` to the stored derivative. Only ever called on leaves, possibly
    /// several times per backward pass; contributions must be summed.
    fn accumulate_derivative(&self, x: Self::Derivative) -> Result<(), RevgradError>;
}
