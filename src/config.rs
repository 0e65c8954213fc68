//! Application configuration.
//!
//! Centralizes the constants used by the browser front-end. Parser and
//! navigation constants live in `podview_core::config`.

use tracing::Level;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "podview";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Content types used when talking to the pod.
pub mod content_type {
    /// Requested for container listings and profiles.
    pub const TURTLE: &str = "text/turtle";
    /// Link header value that makes a PUT create a container.
    pub const BASIC_CONTAINER_LINK: &str = "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";
}

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key for the remembered session.
pub const SESSION_KEY: &str = "podview_session";

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Indentation step for nested entities, in rem.
pub const NESTED_INDENT_REM: f32 = 1.25;
