//! Error types for decision tree evaluation
//!
//! The engine itself is generic over the failure type and never wraps or
//! translates what a decision function reports. `DecisionError` is the
//! ready-made failure type for callers that don't bring their own.

use thiserror::Error;

/// Default failure type for decision nodes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionError {
    /// Assertion failure raised by a decision function
    #[error("{0}")]
    Failed(String),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl DecisionError {
    /// Create a plain assertion failure carrying `message`
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DecisionError>;
