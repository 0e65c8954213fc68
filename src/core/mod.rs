//! Browser-side collaborators and persistence.
//!
//! - [`PodClient`] - `fetch`-based implementation of the pod traits
//! - [`session_store`] - remembered session in localStorage
//! - [`error`] - browser error types

mod client;
pub mod error;
pub mod session_store;

pub use client::PodClient;
