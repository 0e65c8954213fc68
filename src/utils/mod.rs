//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch`] - credentialed `fetch` with timeout racing
//! - [`format`] - display formatting
//! - [`logging`] - tracing bridge to the browser console
//! - [`dom`] - window and storage access

pub mod dom;
pub mod fetch;
pub mod format;
pub mod logging;
