// gradnode-core/src/ops/math_elem/exp.rs

use crate::autograd::node_op::{ensure_non_empty, NodeOp};
use crate::error::GradNodeError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NodeNumeric;

/// Element-wise exponential node: \( y_i = e^{x_i} \).
///
/// Since \( \frac{d}{dx} e^x = e^x \), the local gradient equals the forward
/// output. The Jacobian is diagonal, so `backward` returns only its diagonal.
///
/// # Domain Considerations
/// Defined for every real input. Large inputs overflow to `+inf` following
/// IEEE-754 rules; this is not reported as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExpOp;

impl ExpOp {
    /// Creates a new `ExpOp`.
    pub fn new() -> Self {
        ExpOp
    }
}

impl<T: NodeNumeric> NodeOp<T> for ExpOp {
    type Output = Vec<T>;

    fn name(&self) -> &'static str {
        "exp"
    }

    /// Computes \( e^{x_i} \) for each element. Empty input is rejected like the reductions.
    fn forward(&self, inputs: &[T]) -> Result<Vec<T>, GradNodeError> {
        apply_unary_op(inputs, |x| x.exp(), "exp")
    }

    fn backward(&self, inputs: &[T]) -> Result<Vec<T>, GradNodeError> {
        apply_unary_op(inputs, |x| x.exp(), "exp")
    }

    /// \( dL/dx_i = dL/dy_i \cdot e^{x_i} \).
    fn backward_with(&self, inputs: &[T], grad_output: &Vec<T>) -> Result<Vec<T>, GradNodeError> {
        ensure_non_empty("exp", inputs)?;
        if grad_output.len() != inputs.len() {
            return Err(GradNodeError::LengthMismatch {
                operation: "exp".to_string(),
                expected: inputs.len(),
                actual: grad_output.len(),
            });
        }
        let local = self.backward(inputs)?;
        Ok(local
            .into_iter()
            .zip(grad_output.iter())
            .map(|(g, &up)| g * up)
            .collect())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
