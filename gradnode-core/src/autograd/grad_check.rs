use crate::error::GradNodeError;
use crate::ops::{NodeValue, OpKind};
use thiserror::Error;

/// Default finite-difference step used by [`check_grad`] callers.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default comparison tolerance (absolute and relative) used by [`check_grad`] callers.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed at element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Finite-difference step must be strictly positive, got {epsilon:?}")]
    NonPositiveEpsilon { epsilon: f64 },

    #[error("Numerical gradient is NaN or infinite for element {element_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNotFinite {
        element_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for element {element_index}. Value: {value:?}")]
    AnalyticalGradNotFinite { element_index: usize, value: f64 },

    #[error("Operation failed during gradient check: {0}")]
    Op(GradNodeError),
}

// Map GradNodeError to GradCheckError::Op
impl From<GradNodeError> for GradCheckError {
    fn from(err: GradNodeError) -> Self {
        GradCheckError::Op(err)
    }
}

/// Checks the analytical local gradient of `kind` against central finite differences.
///
/// For every index \( i \) the numerical partial derivative is
/// \\[ \frac{f(x + \epsilon e_i) - f(x - \epsilon e_i)}{2 \epsilon} \\]
/// where \( f \) is the forward output for reductions and the \( i \)-th forward
/// output for element-wise ops (their Jacobian is diagonal).
///
/// Gradients are accepted when they are within `tolerance` either absolutely or
/// relatively to the larger magnitude.
///
/// # Errors
/// The first failing element is reported; see [`GradCheckError`].
pub fn check_grad(
    kind: OpKind,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    if !(epsilon > 0.0) {
        return Err(GradCheckError::NonPositiveEpsilon { epsilon });
    }

    let analytical = kind.backward(inputs)?;
    let two = 2.0f64;

    for (elem_idx, &analytical_grad) in analytical.iter().enumerate() {
        let mut perturbed = inputs.to_vec();

        perturbed[elem_idx] = inputs[elem_idx] + epsilon;
        let value_plus = output_component(kind.forward(&perturbed)?, elem_idx);

        perturbed[elem_idx] = inputs[elem_idx] - epsilon;
        let value_minus = output_component(kind.forward(&perturbed)?, elem_idx);

        let numerical_grad = (value_plus - value_minus) / (two * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                element_index: elem_idx,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                element_index: elem_idx,
                value: analytical_grad,
            });
        }

        compare_gradients(elem_idx, analytical_grad, numerical_grad, tolerance)?;
    }

    log::debug!("check_grad: {} passed for {} inputs", kind, inputs.len());
    Ok(())
}

/// Picks the forward value that depends on input `index`.
fn output_component(value: NodeValue<f64>, index: usize) -> f64 {
    match value {
        NodeValue::Scalar(v) => v,
        NodeValue::Vector(v) => v[index],
    }
}

fn compare_gradients(
    element_index: usize,
    analytical_grad: f64,
    numerical_grad: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    if approx::relative_eq!(
        analytical_grad,
        numerical_grad,
        epsilon = tolerance,
        max_relative = tolerance
    ) {
        return Ok(());
    }
    let difference = (analytical_grad - numerical_grad).abs();
    log::debug!(
        "check_grad: mismatch at element {}: analytical {} vs numerical {}",
        element_index,
        analytical_grad,
        numerical_grad
    );
    Err(GradCheckError::GradientMismatch {
        element_index,
        analytical_grad,
        numerical_grad,
        difference,
    })
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
