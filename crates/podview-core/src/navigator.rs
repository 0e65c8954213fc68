//! Resource tree navigation.
//!
//! [`list_children`] turns a container listing into a sorted [`FolderView`];
//! [`NavigationPath`] holds the stack of visited folders behind the
//! breadcrumbs. Its mutating operations return the folder to re-list, which
//! the dashboard turns into a listing request.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::ROOT_LABEL;
use crate::error::PodError;
use crate::pod::ContainerSource;
use crate::url::{is_absolute_url, path_of};

// =============================================================================
// Nodes and Views
// =============================================================================

/// One entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub name: String,
    pub url: String,
    pub is_folder: bool,
}

impl ResourceNode {
    /// Build a node from a listed URL.
    ///
    /// Fails for empty URLs, URLs containing whitespace and relative URLs.
    pub fn from_url(url: &str) -> Result<Self, PodError> {
        if url.trim().is_empty() || url.chars().any(char::is_whitespace) || !is_absolute_url(url) {
            return Err(PodError::InvalidResource(url.to_string()));
        }
        Ok(Self {
            name: derive_name(url),
            url: url.to_string(),
            is_folder: url.ends_with('/'),
        })
    }
}

/// Contents of one folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderView {
    pub name: String,
    pub url: String,
    pub items: Vec<ResourceNode>,
}

/// Last non-empty path segment of a URL, or `"Root"`.
pub fn derive_name(url: &str) -> String {
    let path = if url.contains("://") { path_of(url) } else { url };
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| ROOT_LABEL.to_string())
}

/// Folders first, then case-insensitive name, then exact name, then URL.
fn compare_nodes(a: &ResourceNode, b: &ResourceNode) -> Ordering {
    b.is_folder
        .cmp(&a.is_folder)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.url.cmp(&b.url))
}

/// List a folder and build its view.
///
/// Entries that cannot be turned into nodes are logged and skipped; only a
/// failure of the listing itself is returned as an error.
pub async fn list_children<S: ContainerSource>(
    source: &S,
    folder_url: &str,
) -> Result<FolderView, PodError> {
    let urls = source.contained_resources(folder_url).await?;

    let mut items: Vec<ResourceNode> = urls
        .iter()
        .filter_map(|url| match ResourceNode::from_url(url) {
            Ok(node) => Some(node),
            Err(err) => {
                tracing::warn!(folder = %folder_url, error = %err, "skipping listed item");
                None
            }
        })
        .collect();
    items.sort_by(compare_nodes);

    tracing::debug!(folder = %folder_url, items = items.len(), "listed folder");
    Ok(FolderView {
        name: derive_name(folder_url),
        url: folder_url.to_string(),
        items,
    })
}

// =============================================================================
// Navigation Path
// =============================================================================

/// One breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub index: usize,
    pub label: String,
    pub url: String,
}

/// Stack of visited folder URLs. Never empty; the first entry is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPath {
    urls: Vec<String>,
}

impl NavigationPath {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            urls: vec![root.into()],
        }
    }

    pub fn push(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    /// Drop the current folder and return the new current one.
    ///
    /// At the root this does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<&str> {
        if self.urls.len() <= 1 {
            return None;
        }
        self.urls.pop();
        Some(self.current())
    }

    /// Keep entries `0..=index` and return the new current one.
    pub fn truncate_to(&mut self, index: usize) -> Option<&str> {
        if index >= self.urls.len() {
            return None;
        }
        self.urls.truncate(index + 1);
        Some(self.current())
    }

    pub fn current(&self) -> &str {
        self.urls.last().map(String::as_str).unwrap_or_default()
    }

    pub fn root(&self) -> &str {
        self.urls.first().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the path holds no folder; the constructor always adds the root.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.urls
            .iter()
            .enumerate()
            .map(|(index, url)| Breadcrumb {
                index,
                label: if index == 0 {
                    ROOT_LABEL.to_string()
                } else {
                    derive_name(url)
                },
                url: url.clone(),
            })
            .collect()
    }
}
