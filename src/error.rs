//! Error types shared by all tools.

use thiserror::Error;

/// Errors a tool surfaces to the caller.
///
/// Every failure falls into one of three kinds: the input was malformed, the
/// target host could not be resolved, or the underlying OS facility failed.
/// There is no recovery or retry; the error is the tool's result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Malformed input: bad JSON, out-of-range port, missing fields.
    #[error("validation error: {0}")]
    Validation(String),

    /// The target host could not be resolved to an address.
    #[error("resolution error: cannot resolve host '{host}': {reason}")]
    Resolution { host: String, reason: String },

    /// The underlying OS command was missing or exited non-zero, or an
    /// internal serialization step failed.
    #[error("execution error: {0}")]
    Execution(String),
}

impl ToolError {
    /// Stable identifier for the error kind, reported alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Validation(_) => "validation",
            ToolError::Resolution { .. } => "resolution",
            ToolError::Execution(_) => "execution",
        }
    }
}
