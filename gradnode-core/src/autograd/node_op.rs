use crate::error::GradNodeError;
use crate::ops::traits::NodeNumeric;
use std::fmt::Debug;

/// Defines the interface shared by every elementary computational-graph node.
///
/// A node operation is a stateless pair of pure functions: `forward` evaluates
/// the operation on an input vector, `backward` returns its local gradient
/// (one partial derivative per input element). Implementors are unit structs;
/// they carry no state between calls and can be reused freely across threads,
/// hence the `Debug + Send + Sync` bounds.
///
/// The shape of the forward result depends on the operation: reductions such
/// as [`SumOp`](crate::ops::reduction::SumOp) produce a single value, while
/// elementwise operations such as [`ExpOp`](crate::ops::math_elem::ExpOp)
/// produce one value per input. This is captured by the associated `Output` type.
pub trait NodeOp<T: NodeNumeric>: Debug + Send + Sync {
    /// The value produced by `forward` (`T` for reductions, `Vec<T>` for elementwise ops).
    type Output;

    /// Short, lowercase name of the operation (`"sum"`, `"product"`, ...).
    fn name(&self) -> &'static str;

    /// Evaluates the operation on `inputs`.
    ///
    /// # Errors
    /// Returns `GradNodeError::InvalidInput` if `inputs` is empty.
    fn forward(&self, inputs: &[T]) -> Result<Self::Output, GradNodeError>;

    /// Computes the local gradient of the operation at `inputs`.
    ///
    /// For a reduction \( y = f(x_1, ..., x_n) \) this is \( [\partial y / \partial x_i]_i \).
    /// For an elementwise operation \( y_i = f(x_i) \) it is the Jacobian diagonal
    /// \( [f'(x_i)]_i \).
    ///
    /// # Returns
    /// * `Ok(Vec<T>)`: one partial derivative per input element. The length of the
    ///   vector **always** equals `inputs.len()`.
    /// * `Err(GradNodeError)`: if `inputs` is empty.
    fn backward(&self, inputs: &[T]) -> Result<Vec<T>, GradNodeError>;

    /// Applies one chain-rule step: given \( dL/dy \) (`grad_output`), returns
    /// \( dL/dx_i = dL/dy \cdot dy/dx_i \) for every input.
    ///
    /// This only covers the node itself; accumulating gradients across a graph
    /// is left to the caller.
    ///
    /// # Errors
    /// Returns `GradNodeError::InvalidInput` on empty inputs and
    /// `GradNodeError::LengthMismatch` when an elementwise `grad_output` does not
    /// have one entry per input.
    fn backward_with(
        &self,
        inputs: &[T],
        grad_output: &Self::Output,
    ) -> Result<Vec<T>, GradNodeError>;
}

/// Rejects empty input vectors, logging the rejection.
pub(crate) fn ensure_non_empty<T>(operation: &str, inputs: &[T]) -> Result<(), GradNodeError> {
    if inputs.is_empty() {
        log::debug!("{}: rejecting empty input", operation);
        return Err(GradNodeError::empty_input(operation));
    }
    Ok(())
}
