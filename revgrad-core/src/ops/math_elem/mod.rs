pub mod exp;
pub mod log;

pub use exp::exp_op;
pub use log::log_op;
