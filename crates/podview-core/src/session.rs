//! Session value handed to the dashboard.
//!
//! Authentication happens outside this crate. What arrives here is an
//! immutable snapshot of who is logged in and, optionally, where their pod
//! lives. Changes are reported back as [`SessionTransition`]s.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// WebID of the logged-in agent.
    pub web_id: Option<String>,
    /// Storage root, when already known.
    pub pod_root: Option<String>,
}

impl Session {
    pub fn new(web_id: Option<String>, pod_root: Option<String>) -> Self {
        Self {
            web_id: web_id.filter(|s| !s.trim().is_empty()),
            pod_root: pod_root.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Whether the session carries anything to resolve a root from.
    pub fn is_active(&self) -> bool {
        self.web_id.is_some() || self.pod_root.is_some()
    }
}

/// Session change requested by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    LoggedOut,
}
