//! Error types for shell arithmetic and basis-set construction.

use thiserror::Error;

/// Errors raised by the shell helpers and the basis-set layout.
#[derive(Debug, Error)]
pub enum ShellError {
    /// An argument lies outside the domain of the operation.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// Name of the rejecting operation
        operation: &'static str,
        /// What was wrong with the input
        reason: String,
    },

    /// The exact result does not fit the fixed-width return type.
    #[error("integer overflow in {operation} (input {input})")]
    Overflow {
        /// Name of the overflowing operation
        operation: &'static str,
        /// The offending input, formatted
        input: String,
    },

    /// A shell type code is valid in form but beyond `MAX_SHELL_TYPE`.
    #[error("shell type {shell_type} exceeds the supported maximum {max}")]
    UnsupportedShellType {
        /// The rejected shell type code
        shell_type: i64,
        /// The configured ceiling
        max: i64,
    },

    /// Shell data with inconsistent lengths or references.
    #[error("shape mismatch: {0}")]
    Shape(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    pub(crate) fn invalid(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(operation: &'static str, input: impl std::fmt::Display) -> Self {
        Self::Overflow {
            operation,
            input: input.to_string(),
        }
    }

    /// Returns true for the `InvalidArgument` kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true for the `Overflow` kind.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
