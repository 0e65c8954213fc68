//! Error types for collaborator and orchestration failures.
//!
//! Parsing and rendering never fail; everything here originates from a
//! remote operation or from validating user input before delegating.

use thiserror::Error;

/// Failure reported by a pod collaborator or the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PodError {
    /// Network request failed (CORS, offline, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response from the remote store.
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    /// Request did not complete in time.
    #[error("request timed out")]
    Timeout,
    /// A listed resource URL could not be turned into a node.
    #[error("invalid resource URL '{0}'")]
    InvalidResource(String),
    /// Item creation was requested without a name.
    #[error("Name is required")]
    InvalidName,
    /// Item creation was requested with nothing open.
    #[error("No active session or current folder")]
    NoActiveFolder,
    /// A collaborator is not available in this environment.
    #[error("{0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(PodError::Http { status: 404 }.to_string(), "HTTP error: 404");
        assert_eq!(PodError::InvalidName.to_string(), "Name is required");
        assert_eq!(
            PodError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }
}
