//! In-memory pod for tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};

use super::{ContainerSource, ResourceCreator, ResourceFetcher, RootResolver, discover_root};
use crate::error::PodError;
use crate::session::Session;

/// A pod held in memory: containers with their members and text documents.
///
/// Any URL can be marked as failing, which makes every operation on it
/// return `PodError::Http { status: 500 }`.
#[derive(Debug, Default)]
pub struct MemoryPod {
    containers: RefCell<BTreeMap<String, Vec<String>>>,
    documents: RefCell<BTreeMap<String, String>>,
    failing: RefCell<HashSet<String>>,
    listings: Cell<usize>,
}

impl MemoryPod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container (and register it with its parent, if present).
    pub fn add_container(&self, url: &str) {
        self.containers
            .borrow_mut()
            .entry(url.to_string())
            .or_default();
        self.link_to_parent(url);
    }

    /// Add or replace a document (and register it with its parent, if present).
    pub fn put_document(&self, url: &str, body: &str) {
        self.documents
            .borrow_mut()
            .insert(url.to_string(), body.to_string());
        self.link_to_parent(url);
    }

    /// List a raw member URL under a container without creating it.
    pub fn add_member(&self, container: &str, member: &str) {
        self.containers
            .borrow_mut()
            .entry(container.to_string())
            .or_default()
            .push(member.to_string());
    }

    pub fn fail(&self, url: &str) {
        self.failing.borrow_mut().insert(url.to_string());
    }

    pub fn recover(&self, url: &str) {
        self.failing.borrow_mut().remove(url);
    }

    /// Number of container listings served so far.
    pub fn listing_count(&self) -> usize {
        self.listings.get()
    }

    pub fn document(&self, url: &str) -> Option<String> {
        self.documents.borrow().get(url).cloned()
    }

    pub fn has_container(&self, url: &str) -> bool {
        self.containers.borrow().contains_key(url)
    }

    fn link_to_parent(&self, url: &str) {
        let Some(parent) = parent_of(url) else {
            return;
        };
        let mut containers = self.containers.borrow_mut();
        if let Some(members) = containers.get_mut(&parent)
            && !members.iter().any(|m| m == url)
        {
            members.push(url.to_string());
        }
    }

    fn check(&self, url: &str) -> Result<(), PodError> {
        if self.failing.borrow().contains(url) {
            Err(PodError::Http { status: 500 })
        } else {
            Ok(())
        }
    }
}

fn parent_of(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let (parent, _) = trimmed.rsplit_once('/')?;
    if parent.ends_with('/') {
        return None;
    }
    Some(format!("{parent}/"))
}

impl ContainerSource for MemoryPod {
    async fn contained_resources(&self, folder_url: &str) -> Result<Vec<String>, PodError> {
        self.listings.set(self.listings.get() + 1);
        self.check(folder_url)?;
        self.containers
            .borrow()
            .get(folder_url)
            .cloned()
            .ok_or(PodError::Http { status: 404 })
    }
}

impl ResourceFetcher for MemoryPod {
    async fn fetch_text(&self, url: &str) -> Result<String, PodError> {
        self.check(url)?;
        if let Some(body) = self.documents.borrow().get(url) {
            return Ok(body.clone());
        }
        let containers = self.containers.borrow();
        let members = containers.get(url).ok_or(PodError::Http { status: 404 })?;
        let listing = members
            .iter()
            .map(|m| format!("<{m}>"))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("<> <http://www.w3.org/ns/ldp#contains> {listing} ."))
    }
}

impl ResourceCreator for MemoryPod {
    async fn create_container(&self, url: &str) -> Result<(), PodError> {
        self.check(url)?;
        self.add_container(url);
        Ok(())
    }

    async fn create_file(&self, url: &str, body: &str) -> Result<(), PodError> {
        self.check(url)?;
        self.put_document(url, body);
        Ok(())
    }
}

impl RootResolver for MemoryPod {
    async fn resolve_root(&self, session: &Session) -> Option<String> {
        discover_root(self, session).await
    }
}
