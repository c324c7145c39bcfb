use thiserror::Error;

/// Custom error type for gradnode operations.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradNodeError {
    /// The operation received inputs it cannot work with (e.g. an empty input vector).
    #[error("Invalid input for operation {operation}: {reason}")]
    InvalidInput { operation: String, reason: String },

    /// An upstream gradient does not have one entry per input element.
    #[error("Length mismatch during operation {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown operation kind: {0}")]
    UnknownOp(String),
}

impl GradNodeError {
    /// Builds the error returned when an operation is called with no inputs.
    pub(crate) fn empty_input(operation: &str) -> Self {
        GradNodeError::InvalidInput {
            operation: operation.to_string(),
            reason: "input vector must not be empty".to_string(),
        }
    }
}
