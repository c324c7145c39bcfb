use crate::autograd::NodeOp;
use crate::error::GradNodeError;
use crate::ops::math_elem::ExpOp;
use crate::ops::reduction::{ProductOp, SumOp};
use crate::ops::traits::NodeNumeric;
use std::fmt;
use std::str::FromStr;

/// Output of a node evaluated through [`OpKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue<T> {
    /// Result of a reduction (sum, product).
    Scalar(T),
    /// Result of an element-wise operation, one value per input.
    Vector(Vec<T>),
}

impl<T: NodeNumeric> NodeValue<T> {
    /// Returns the scalar value, or `None` for a vector.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            NodeValue::Scalar(v) => Some(*v),
            NodeValue::Vector(_) => None,
        }
    }

    /// Returns the vector values, or `None` for a scalar.
    pub fn as_vector(&self) -> Option<&[T]> {
        match self {
            NodeValue::Scalar(_) => None,
            NodeValue::Vector(v) => Some(v.as_slice()),
        }
    }

    /// Number of values held (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            NodeValue::Scalar(_) => 1,
            NodeValue::Vector(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tag selecting one of the elementary node operations at runtime.
///
/// Every variant is stateless; dispatching through `OpKind` is equivalent to
/// calling the matching op struct directly, with the output wrapped in a
/// [`NodeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Sum,
    Product,
    Exp,
}

impl OpKind {
    /// All supported operation kinds.
    pub const ALL: [OpKind; 3] = [OpKind::Sum, OpKind::Product, OpKind::Exp];

    pub fn name(self) -> &'static str {
        match self {
            OpKind::Sum => NodeOp::<f64>::name(&SumOp),
            OpKind::Product => NodeOp::<f64>::name(&ProductOp),
            OpKind::Exp => NodeOp::<f64>::name(&ExpOp),
        }
    }

    /// `true` for operations producing a single value from the whole input.
    pub fn is_reduction(self) -> bool {
        matches!(self, OpKind::Sum | OpKind::Product)
    }

    pub fn forward<T: NodeNumeric>(self, inputs: &[T]) -> Result<NodeValue<T>, GradNodeError> {
        match self {
            OpKind::Sum => SumOp.forward(inputs).map(NodeValue::Scalar),
            OpKind::Product => ProductOp.forward(inputs).map(NodeValue::Scalar),
            OpKind::Exp => ExpOp.forward(inputs).map(NodeValue::Vector),
        }
    }

    /// Local gradient; always one entry per input.
    pub fn backward<T: NodeNumeric>(self, inputs: &[T]) -> Result<Vec<T>, GradNodeError> {
        match self {
            OpKind::Sum => SumOp.backward(inputs),
            OpKind::Product => ProductOp.backward(inputs),
            OpKind::Exp => ExpOp.backward(inputs),
        }
    }

    /// Chain-rule step with an upstream gradient.
    ///
    /// Reductions take a `Scalar` upstream gradient, element-wise ops a `Vector`.
    /// The other pairing is rejected with `GradNodeError::InvalidInput`.
    pub fn backward_with<T: NodeNumeric>(
        self,
        inputs: &[T],
        grad_output: &NodeValue<T>,
    ) -> Result<Vec<T>, GradNodeError> {
        match (self, grad_output) {
            (OpKind::Sum, NodeValue::Scalar(g)) => SumOp.backward_with(inputs, g),
            (OpKind::Product, NodeValue::Scalar(g)) => ProductOp.backward_with(inputs, g),
            (OpKind::Exp, NodeValue::Vector(g)) => ExpOp.backward_with(inputs, g),
            (kind, _) => {
                let expected = if kind.is_reduction() { "scalar" } else { "vector" };
                log::debug!("{}: upstream gradient kind mismatch, expected {}", kind, expected);
                Err(GradNodeError::InvalidInput {
                    operation: kind.name().to_string(),
                    reason: format!("expected a {} upstream gradient", expected),
                })
            }
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for OpKind {
    type Err = GradNodeError;

    /// Parses an operation name, ignoring case. `"mul"` is accepted for `product`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(OpKind::Sum),
            "product" | "mul" => Ok(OpKind::Product),
            "exp" => Ok(OpKind::Exp),
            _ => Err(GradNodeError::UnknownOp(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod tests;
