//! # revgrad-core
//!
//! Reverse-mode automatic differentiation over dynamically built graphs.
//!
//! The engine in [`autograd`] is generic over the [`Variable`] capability set. [`Scalar`]
//! is the reference `f64` implementation, and [`ops`] provides the differentiable
//! operations that build scalar graphs.
//!
//! ```
//! use revgrad_core::Scalar;
//!
//! let x = Scalar::new(3.0);
//! let y = Scalar::new(4.0);
//! let z = &(&x * &y) + &x;
//! z.backward().unwrap();
//! assert_eq!(x.derivative(), Some(5.0));
//! assert_eq!(y.derivative(), Some(3.0));
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the main types so they are reachable as `revgrad_core::Scalar`, etc.
pub use autograd::{backpropagate, topological_sort, Context, Variable, VariableId};
pub use error::RevgradError;
pub use scalar::Scalar;
// Re-export traits required by public functions/structs
pub use num_traits;
