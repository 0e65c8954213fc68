//! UI components built with Leptos.
//!
//! - [`Workspace`] - Top-level layout (connect form or explorer)
//! - [`connect`] - WebID / pod URL form
//! - [`explorer`] - Pod browser UI
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar showing session, pod and location info
//! - [`viewer`] - Opened file rendering

pub mod connect;
pub mod explorer;
pub mod icons;
pub mod status;
pub mod viewer;
mod workspace;

pub use workspace::Workspace;
