//! Error types for the desktop shell
//!
//! Window manager commands never fail: a stale target is a no-op. These
//! errors only surface at the shell boundary (app lookups, configuration
//! and snapshot JSON, the browser bridge).

use crate::types::WindowId;

/// Errors that can occur in shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// No application is registered under the given ID
    UnknownApp(String),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::UnknownApp(app_id) => write!(f, "unknown app: {}", app_id),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        DesktopError::SerializationError(e.to_string())
    }
}

/// Result type alias for shell operations
pub type DesktopResult<T> = Result<T, DesktopError>;
