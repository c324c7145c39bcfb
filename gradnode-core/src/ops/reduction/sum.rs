use crate::autograd::node_op::{ensure_non_empty, NodeOp};
use crate::error::GradNodeError;
use crate::ops::traits::NodeNumeric;

/// Sum node: \( y = \sum_i x_i \).
///
/// The partial derivative of a sum with respect to each addend is 1,
/// independently of the input values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SumOp;

impl SumOp {
    /// Creates a new `SumOp`.
    pub fn new() -> Self {
        SumOp
    }
}

impl<T: NodeNumeric> NodeOp<T> for SumOp {
    type Output = T;

    fn name(&self) -> &'static str {
        "sum"
    }

    /// Sums all elements of `inputs`.
    ///
    /// Empty input is rejected rather than mapped to the additive identity,
    /// matching `ProductOp`.
    fn forward(&self, inputs: &[T]) -> Result<T, GradNodeError> {
        log::trace!("sum forward: {} inputs", inputs.len());
        ensure_non_empty("sum", inputs)?;
        Ok(inputs.iter().copied().sum())
    }

    fn backward(&self, inputs: &[T]) -> Result<Vec<T>, GradNodeError> {
        log::trace!("sum backward: {} inputs", inputs.len());
        ensure_non_empty("sum", inputs)?;
        Ok(vec![T::one(); inputs.len()])
    }

    /// \( dL/dx_i = dL/dy \) for every addend.
    fn backward_with(&self, inputs: &[T], grad_output: &T) -> Result<Vec<T>, GradNodeError> {
        log::trace!("sum backward_with: {} inputs", inputs.len());
        ensure_non_empty("sum", inputs)?;
        Ok(vec![*grad_output; inputs.len()])
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
