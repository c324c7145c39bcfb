//! Node contract and gradient verification.

pub mod grad_check;
pub mod node_op;

pub use grad_check::{check_grad, GradCheckError};
pub use node_op::NodeOp;
