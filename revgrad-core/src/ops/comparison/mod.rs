pub mod equal;
pub mod lt;

pub use equal::eq_op;
pub use lt::lt_op;
