//! Reverse-mode automatic differentiation engine.
//!
//! The engine is generic over the [`Variable`] capability set: it sorts the graph
//! reachable from an output ([`topological_sort`]) and sweeps it backward, distributing
//! derivatives through each node's local chain rule ([`backpropagate`]). Operations
//! stash forward-pass values for their backward rule in a [`Context`].

pub mod backward;
pub mod context;
pub mod grad_check;
pub mod graph;
pub mod variable;

pub use backward::backpropagate;
pub use context::Context;
pub use graph::topological_sort;
pub use variable::{next_variable_id, Variable, VariableId};
