use crate::autograd::node_op::{ensure_non_empty, NodeOp};
use crate::error::GradNodeError;
use crate::ops::traits::NodeNumeric;

/// Product node: \( y = \prod_i x_i \).
///
/// The partial derivative with respect to one factor is the product of all
/// the other factors:
/// \\[ \frac{\partial y}{\partial x_i} = \prod_{j \neq i} x_j \\]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProductOp;

impl ProductOp {
    /// Creates a new `ProductOp`.
    pub fn new() -> Self {
        ProductOp
    }
}

/// Computes, for every index, the product of all elements except that one.
///
/// Uses a prefix/suffix sweep instead of dividing the total product by `x[i]`,
/// so zeros in the input are handled exactly. `exclusive[i]` first holds the
/// prefix product `x[0] * ... * x[i-1]`, then gets multiplied by the suffix
/// product `x[i+1] * ... * x[n-1]` on the way back.
fn exclusive_products<T: NodeNumeric>(inputs: &[T]) -> Vec<T> {
    let mut exclusive = Vec::with_capacity(inputs.len());
    let mut prefix = T::one();
    for &x in inputs {
        exclusive.push(prefix);
        prefix *= x;
    }

    let mut suffix = T::one();
    for (slot, &x) in exclusive.iter_mut().zip(inputs.iter()).rev() {
        *slot *= suffix;
        suffix *= x;
    }
    exclusive
}

impl<T: NodeNumeric> NodeOp<T> for ProductOp {
    type Output = T;

    fn name(&self) -> &'static str {
        "product"
    }

    /// Multiplies all elements of `inputs`.
    ///
    /// Empty input is rejected instead of returning the multiplicative identity.
    fn forward(&self, inputs: &[T]) -> Result<T, GradNodeError> {
        log::trace!("product forward: {} inputs", inputs.len());
        ensure_non_empty("product", inputs)?;
        Ok(inputs.iter().copied().product())
    }

    /// A single factor yields `[1]` (product of the empty remainder).
    fn backward(&self, inputs: &[T]) -> Result<Vec<T>, GradNodeError> {
        log::trace!("product backward: {} inputs", inputs.len());
        ensure_non_empty("product", inputs)?;
        Ok(exclusive_products(inputs))
    }

    fn backward_with(&self, inputs: &[T], grad_output: &T) -> Result<Vec<T>, GradNodeError> {
        let local = self.backward(inputs)?;
        Ok(local.into_iter().map(|g| g * *grad_output).collect())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
