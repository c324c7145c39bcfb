//! # Node Operations Module (`ops`)
//!
//! This module gathers the elementary operations that can sit at a node of a
//! computational graph. Operations are categorized into submodules based on
//! the shape of their output.
//!
//! ## Structure:
//!
//! - **Op structs:** Each operation is a stateless unit struct (e.g. `SumOp`,
//!   `ExpOp`) implementing the [`NodeOp`](crate::autograd::NodeOp) trait, which
//!   provides `forward` and `backward`.
//! - **Dispatch (`ops::kind`):** [`OpKind`] selects an operation at runtime and
//!   wraps its output in a [`NodeValue`].
//! - **Traits (`ops::traits`):** The [`NodeNumeric`](traits::NodeNumeric) element bound.
//!
//! ## Key Submodules:
//!
//! - [`reduction`]: Operations reducing the input vector to one value (sum, product).
//! - [`math_elem`]: Element-wise math functions (exp).

pub mod traits;

pub mod kind;
pub mod math_elem;
pub mod reduction;

pub use kind::{NodeValue, OpKind};

use crate::autograd::node_op::ensure_non_empty;
use crate::error::GradNodeError;
use crate::ops::traits::NodeNumeric;

/// Applies a unary function to every element of `inputs`.
///
/// Handles the empty-input check and trace logging shared by element-wise ops.
///
/// # Arguments
/// * `inputs`: The input vector.
/// * `op`: Closure applied to each element.
/// * `op_name`: Name of the operation for logs and error messages.
pub(crate) fn apply_unary_op<T, F>(
    inputs: &[T],
    op: F,
    op_name: &str,
) -> Result<Vec<T>, GradNodeError>
where
    T: NodeNumeric,
    F: Fn(T) -> T,
{
    log::trace!("{}: {} inputs", op_name, inputs.len());
    ensure_non_empty(op_name, inputs)?;
    Ok(inputs.iter().map(|&x| op(x)).collect())
}
