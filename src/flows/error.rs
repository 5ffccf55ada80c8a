//! Error types for the flow functions.

use thiserror::Error;

/// Errors that can occur inside the flow functions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowError {
    /// A zipped divisor was zero.
    #[error("division by zero")]
    DivideByZero,

    /// The task-local secret key was absent or did not match.
    #[error("unauthorized: secret key missing or wrong")]
    Unauthorized,
}
