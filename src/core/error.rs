//! Error types for browser operations.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage operations for the remembered session
//!
//! Fetch errors are converted into [`PodError`] at the collaborator boundary
//! so the dashboard only ever sees core error values.

use std::fmt;

use podview_core::PodError;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for PodError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::HttpError(status) => PodError::Http { status },
            FetchError::Timeout => PodError::Timeout,
            FetchError::NetworkError(msg) => PodError::Network(msg),
            FetchError::NoWindow => PodError::Unavailable(err.to_string()),
            other => PodError::Network(other.to_string()),
        }
    }
}

/// Errors from persisting the session in localStorage.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// localStorage not available.
    StorageUnavailable,
    /// Failed to encode the session as JSON.
    SerializationFailed,
    /// Failed to save to localStorage.
    SaveFailed,
    /// Failed to remove from localStorage.
    RemoveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::SerializationFailed => write!(f, "failed to encode session"),
            Self::SaveFailed => write!(f, "failed to save to localStorage"),
            Self::RemoveFailed => write!(f, "failed to remove from localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_into_pod_error() {
        assert_eq!(
            PodError::from(FetchError::HttpError(401)),
            PodError::Http { status: 401 }
        );
        assert_eq!(PodError::from(FetchError::Timeout), PodError::Timeout);
        assert_eq!(
            PodError::from(FetchError::ResponseReadFailed),
            PodError::Network("Failed to read response".into())
        );
        assert_eq!(
            PodError::from(FetchError::NoWindow),
            PodError::Unavailable("Browser window not available".into())
        );
    }
}
