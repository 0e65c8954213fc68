//! View-side models for the application.
//!
//! Contains:
//! - [`ConnectionState`], [`ConnectForm`], [`ConnectError`] - Pod connection and the connect form
//! - [`SheetState`] - Create-item sheet state

mod connection;
mod explorer;

pub use connection::{ConnectError, ConnectForm, ConnectionState};
pub use explorer::SheetState;
