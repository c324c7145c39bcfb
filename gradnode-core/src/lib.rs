//! Stateless computational-graph node operations for reverse-mode automatic
//! differentiation.
//!
//! Each node kind ([`SumOp`], [`ProductOp`], [`ExpOp`]) implements [`NodeOp`],
//! exposing a `forward` evaluation and the `backward` local gradient.
//! [`OpKind`] dispatches between them at runtime.

pub mod autograd;
pub mod ops;
#[cfg(test)]
mod utils;

pub mod error;
pub use error::GradNodeError;

pub use autograd::{check_grad, GradCheckError, NodeOp};
pub use ops::math_elem::ExpOp;
pub use ops::reduction::{ProductOp, SumOp};
pub use ops::traits::NodeNumeric;
pub use ops::{NodeValue, OpKind};

// Re-export traits required by public bounds
pub use num_traits;
