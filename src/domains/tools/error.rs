//! Tool-specific error types.

use thiserror::Error;

use crate::domains::allergies::AllergyError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool executed but the underlying operation failed.
    /// Displays as the bare domain message so envelopes stay readable.
    #[error("{0}")]
    ExecutionFailed(String),

    /// The tool catalog or handler table was misconfigured at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<AllergyError> for ToolError {
    fn from(err: AllergyError) -> Self {
        Self::ExecutionFailed(err.to_string())
    }
}
