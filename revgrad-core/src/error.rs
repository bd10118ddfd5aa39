use crate::autograd::variable::VariableId;
use thiserror::Error;

/// Custom error type for the revgrad engine.
///
/// The backward engine never raises these itself; it only forwards what a
/// `Variable` implementation reports from `chain_rule` or `accumulate_derivative`.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum RevgradError {
    #[error("Variable {id} has no producing function; chain_rule is undefined for leaves and constants")]
    MissingHistory { id: VariableId },

    #[error("Backward rule of '{operation}' expected {expected} saved values, found {actual} (was the context created with no_grad?)")]
    MissingSavedValues {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Backward rule of '{operation}' returned {actual} derivatives for {expected} inputs")]
    GradientArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Derivatives can only be accumulated on leaf variables (variable {id} is not a leaf)")]
    NonLeafAccumulation { id: VariableId },

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}
