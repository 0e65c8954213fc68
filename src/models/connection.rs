use podview_core::Session;
use podview_core::url::{extract_host, is_absolute_url};

use std::fmt;

/// Connection state of the explorer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    /// Resolving the pod root for a session.
    Connecting,
    Connected(Session),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }

    /// Short label for the status bar: WebID host, pod host, or a placeholder.
    pub fn display_name(&self) -> String {
        match self {
            ConnectionState::Connected(session) => session
                .web_id
                .as_deref()
                .or(session.pod_root.as_deref())
                .and_then(extract_host)
                .unwrap_or_else(|| "anonymous".to_string()),
            ConnectionState::Connecting => "connecting...".to_string(),
            ConnectionState::Disconnected => "guest".to_string(),
        }
    }
}

/// Why the connect form could not produce a session.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectError {
    Empty,
    InvalidUrl(String),
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter a WebID or a pod URL"),
            Self::InvalidUrl(url) => write!(f, "'{}' is not a valid URL", url),
        }
    }
}

impl std::error::Error for ConnectError {}

/// Raw values of the connect form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectForm {
    pub web_id: String,
    pub pod_url: String,
}

impl ConnectForm {
    pub fn from_session(session: &Session) -> Self {
        Self {
            web_id: session.web_id.clone().unwrap_or_default(),
            pod_url: session.pod_root.clone().unwrap_or_default(),
        }
    }

    /// Validate the fields and build a session.
    pub fn to_session(&self) -> Result<Session, ConnectError> {
        let web_id = self.web_id.trim();
        let pod_url = self.pod_url.trim();
        if web_id.is_empty() && pod_url.is_empty() {
            return Err(ConnectError::Empty);
        }
        for value in [web_id, pod_url] {
            if !value.is_empty() && !(is_absolute_url(value) && extract_host(value).is_some()) {
                return Err(ConnectError::InvalidUrl(value.to_string()));
            }
        }
        Ok(Session::new(
            Some(web_id.to_string()),
            Some(pod_url.to_string()),
        ))
    }
}
