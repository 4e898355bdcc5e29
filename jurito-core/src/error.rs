/// Structured error types for jurito-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (jurito-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a backend call.
///
/// The views collapse every variant into a fixed user-facing string, but the
/// structured cause is kept so the CLI layer can log it and callers can
/// distinguish timeouts from client errors from server errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Local file could not be read before upload
    #[error("could not read file {path:?}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    /// Request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Request could not reach the server or the connection dropped
    #[error("failed to reach server: {reason}")]
    Transport { reason: String },

    /// Server answered with a non-success HTTP status
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// Response arrived but was not the expected JSON shape
    #[error("unexpected response shape: {reason}")]
    InvalidResponse { reason: String },
}

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

impl BackendError {
    /// Create a file-read error
    pub fn file_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create an invalid-response error
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// True for 4xx statuses (the request was wrong)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status } if (400..500).contains(status))
    }

    /// True for 5xx statuses (the server is unwell)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status } if (500..600).contains(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::transport("connection refused");
        assert_eq!(err.to_string(), "failed to reach server: connection refused");

        let err = BackendError::file_read("/tmp/contrato.pdf", "no such file");
        assert!(err.to_string().contains("/tmp/contrato.pdf"));
    }

    #[test]
    fn test_status_classification() {
        let not_found = BackendError::Status { status: 404 };
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let unavailable = BackendError::Status { status: 503 };
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());

        assert!(!BackendError::Timeout.is_client_error());
    }
}
