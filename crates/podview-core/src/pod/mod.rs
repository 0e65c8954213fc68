//! Collaborators that reach the remote store, plus pure discovery helpers.
//!
//! The core never performs I/O itself. Listing, fetching and creating are
//! delegated to implementors of the traits below: the browser client in the
//! front-end, or [`mock::MemoryPod`] in tests.

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{LDP_CONTAINS, STORAGE_PREDICATES};
use crate::error::PodError;
use crate::session::Session;
use crate::turtle::scanner::{self, Object};
use crate::turtle::{self, PropertyValue};
use crate::url;

/// `ldp:contains` (prefixed or full IRI) followed by its objects.
static CONTAINS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?s)(?:^|[ \t\r\n])(?:ldp:contains|<{}>)[ \t\r\n]+(.+)$",
        regex::escape(LDP_CONTAINS)
    );
    Regex::new(&pattern).expect("contains pattern is valid")
});

/// Any storage predicate followed by a bracketed IRI, wherever it appears.
static STORAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:[A-Za-z]*:storage|[A-Za-z]*:storageSpace|<http://www\.w3\.org/ns/pim/space#storage>|<http://www\.w3\.org/ns/solid/terms#storageSpace>)[ \t\r\n]+<([^<>]+)>",
    )
    .expect("storage pattern is valid")
});

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Authenticated retrieval of a resource body.
#[allow(async_fn_in_trait)]
pub trait ResourceFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, PodError>;
}

/// Lists the resources directly inside a container.
#[allow(async_fn_in_trait)]
pub trait ContainerSource {
    /// Absolute URLs of the contained resources. Folders end with `/`.
    async fn contained_resources(&self, folder_url: &str) -> Result<Vec<String>, PodError>;
}

/// Creates containers and files.
#[allow(async_fn_in_trait)]
pub trait ResourceCreator {
    async fn create_container(&self, url: &str) -> Result<(), PodError>;
    async fn create_file(&self, url: &str, body: &str) -> Result<(), PodError>;
}

/// Determines the storage root for a session.
#[allow(async_fn_in_trait)]
pub trait RootResolver {
    async fn resolve_root(&self, session: &Session) -> Option<String>;
}

impl<T: ResourceFetcher + ?Sized> ResourceFetcher for &T {
    async fn fetch_text(&self, url: &str) -> Result<String, PodError> {
        (**self).fetch_text(url).await
    }
}

impl<T: ContainerSource + ?Sized> ContainerSource for &T {
    async fn contained_resources(&self, folder_url: &str) -> Result<Vec<String>, PodError> {
        (**self).contained_resources(folder_url).await
    }
}

impl<T: ResourceCreator + ?Sized> ResourceCreator for &T {
    async fn create_container(&self, url: &str) -> Result<(), PodError> {
        (**self).create_container(url).await
    }

    async fn create_file(&self, url: &str, body: &str) -> Result<(), PodError> {
        (**self).create_file(url, body).await
    }
}

// =============================================================================
// Pod Info
// =============================================================================

/// Summary of the pod shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodInfo {
    pub base_url: String,
    pub provider: String,
    pub username: String,
}

impl PodInfo {
    /// Derive provider and username from a root URL.
    pub fn from_root(root: &str) -> Option<Self> {
        let host = url::extract_host(root)?;

        let provider = if host.contains("inrupt.com") {
            "Inrupt"
        } else if host.contains("solidcommunity.net") {
            "Solid Community"
        } else {
            "unknown"
        };

        let username = host
            .split('.')
            .next()
            .filter(|label| !label.is_empty())
            .or_else(|| url::path_of(root).split('/').find(|s| !s.is_empty()))
            .unwrap_or("unknown");

        Some(Self {
            base_url: root.to_string(),
            provider: provider.to_string(),
            username: username.to_string(),
        })
    }
}

// =============================================================================
// Discovery Helpers
// =============================================================================

/// Extract `ldp:contains` objects from a container document.
///
/// Relative references are resolved against `base_url`. Order follows the
/// document; duplicates and the container itself are dropped.
pub fn contained_resources_in(base_url: &str, body: &str) -> Vec<String> {
    let text: String = body
        .lines()
        .map(scanner::strip_comment)
        .collect::<Vec<_>>()
        .join("\n");

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for statement in scanner::statements(&text) {
        let Some(caps) = CONTAINS.captures(statement.trim()) else {
            continue;
        };
        let Some(objects) = caps.get(1) else {
            continue;
        };
        for object in scanner::split_top_level(objects.as_str(), ',') {
            let Some(Object::Iri(reference)) = scanner::parse_object(object) else {
                tracing::trace!(object = %object.trim(), "skipping non-IRI container member");
                continue;
            };
            let Some(resolved) = url::resolve(base_url, reference) else {
                continue;
            };
            if resolved != base_url && seen.insert(resolved.clone()) {
                urls.push(resolved);
            }
        }
    }

    tracing::debug!(container = %base_url, count = urls.len(), "read container listing");
    urls
}

/// Find the storage root declared in a WebID profile document.
///
/// Prefers a storage property on the WebID's own subject, then falls back to
/// the first storage statement anywhere in the document.
pub fn storage_from_profile(web_id: &str, profile: &str) -> Option<String> {
    let from_subject = turtle::parse(profile)
        .into_iter()
        .filter(|entity| {
            url::resolve(web_id, &entity.subject).is_some_and(|subject| subject == web_id)
        })
        .find_map(|entity| {
            entity
                .properties
                .iter()
                .filter(|(key, _)| is_storage_predicate(key))
                .find_map(|(_, value)| match value {
                    PropertyValue::Single(v) => Some(v.clone()),
                    PropertyValue::List(vs) => vs.first().cloned(),
                    PropertyValue::Entities(_) => None,
                })
        });

    let raw = from_subject.or_else(|| {
        STORAGE
            .captures(profile)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })?;

    url::resolve(web_id, &raw)
}

fn is_storage_predicate(key: &str) -> bool {
    let local = key.rsplit(['#', '/', ':']).next().unwrap_or(key);
    STORAGE_PREDICATES.contains(&local)
}

/// `scheme://host/` of a WebID, used when the profile names no storage.
pub fn origin_root(web_id: &str) -> Option<String> {
    url::origin(web_id)
}

/// Resolve the storage root for a session by fetching the WebID profile.
///
/// Order: an explicit `pod_root`, a storage statement in the profile, then
/// the WebID origin if it answers. Returns `None` when nothing works.
pub async fn discover_root<F: ResourceFetcher>(fetcher: &F, session: &Session) -> Option<String> {
    if let Some(root) = &session.pod_root {
        return Some(with_trailing_slash(root));
    }
    let web_id = session.web_id.as_deref()?;
    let document = web_id.split('#').next().unwrap_or(web_id);

    match fetcher.fetch_text(document).await {
        Ok(profile) => {
            if let Some(root) = storage_from_profile(web_id, &profile) {
                tracing::debug!(%web_id, %root, "storage found in profile");
                return Some(with_trailing_slash(&root));
            }
        }
        Err(err) => tracing::warn!(%web_id, error = %err, "failed to fetch profile"),
    }

    let fallback = origin_root(web_id)?;
    match fetcher.fetch_text(&fallback).await {
        Ok(_) => Some(fallback),
        Err(err) => {
            tracing::warn!(%web_id, error = %err, "could not determine pod root");
            None
        }
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MemoryPod;
    use super::*;

    const CONTAINER: &str = r#"@prefix ldp: <http://www.w3.org/ns/ldp#>.
@prefix stat: <http://www.w3.org/ns/posix/stat#>.

<> a ldp:Container, ldp:BasicContainer;
    ldp:contains <notes.ttl>, <photos/>, <https://pod.example/data/cat.jpg> ;
    stat:size 4096 .
<notes.ttl> stat:size 12.5 .
<https://pod.example/data/> ldp:contains <notes.ttl> # repeated
."#;

    #[test]
    fn test_contained_resources_in() {
        let urls = contained_resources_in("https://pod.example/data/", CONTAINER);
        assert_eq!(
            urls,
            vec![
                "https://pod.example/data/notes.ttl",
                "https://pod.example/data/photos/",
                "https://pod.example/data/cat.jpg",
            ]
        );
    }

    #[test]
    fn test_contained_resources_full_predicate() {
        let body = "<> <http://www.w3.org/ns/ldp#contains> <a/> .";
        assert_eq!(
            contained_resources_in("https://pod.example/", body),
            vec!["https://pod.example/a/"]
        );
        assert!(contained_resources_in("https://pod.example/", "").is_empty());
    }

    #[test]
    fn test_storage_on_subject() {
        let profile = r#"@prefix pim: <http://www.w3.org/ns/pim/space#>.
<https://alice.example/profile/card#me>
    a <http://xmlns.com/foaf/0.1/Person> ;
    pim:storage <https://storage.example/alice/> .
"#;
        assert_eq!(
            storage_from_profile("https://alice.example/profile/card#me", profile),
            Some("https://storage.example/alice/".to_string())
        );
    }

    #[test]
    fn test_storage_relative_subject_and_fallback_scan() {
        let relative = "<#me> <http://www.w3.org/ns/solid/terms#storageSpace> </> .";
        assert_eq!(
            storage_from_profile("https://bob.example/profile/card#me", relative),
            Some("https://bob.example/".to_string())
        );

        let prefixed = "@prefix : <#>.\n:me space:storage <https://s.example/bob/> .";
        assert_eq!(
            storage_from_profile("https://bob.example/profile/card#me", prefixed),
            Some("https://s.example/bob/".to_string())
        );

        assert_eq!(storage_from_profile("https://x.example/#me", "<#me> a <urn:T> ."), None);
    }

    #[test]
    fn test_pod_info() {
        let info = PodInfo::from_root("https://alice.inrupt.com/").unwrap();
        assert_eq!(info.provider, "Inrupt");
        assert_eq!(info.username, "alice");

        let info = PodInfo::from_root("https://bob.solidcommunity.net/").unwrap();
        assert_eq!(info.provider, "Solid Community");

        let info = PodInfo::from_root("http://localhost:3000/carol/").unwrap();
        assert_eq!(info.provider, "unknown");
        assert_eq!(info.username, "localhost");

        assert_eq!(PodInfo::from_root("not a url"), None);
    }

    #[tokio::test]
    async fn test_discover_root_prefers_explicit_root() {
        let pod = MemoryPod::new();
        let session = Session::new(None, Some("https://pod.example/alice".into()));
        assert_eq!(
            discover_root(&pod, &session).await,
            Some("https://pod.example/alice/".to_string())
        );
    }

    #[tokio::test]
    async fn test_discover_root_from_profile() {
        let pod = MemoryPod::new();
        pod.put_document(
            "https://alice.example/profile/card",
            "<https://alice.example/profile/card#me> pim:storage <https://alice.example/pod/> .",
        );
        let session = Session::new(Some("https://alice.example/profile/card#me".into()), None);
        assert_eq!(
            discover_root(&pod, &session).await,
            Some("https://alice.example/pod/".to_string())
        );
    }

    #[tokio::test]
    async fn test_discover_root_origin_fallback() {
        let pod = MemoryPod::new();
        pod.put_document("https://bob.example/profile/card", "<#me> a <urn:Person> .");
        pod.add_container("https://bob.example/");
        let session = Session::new(Some("https://bob.example/profile/card#me".into()), None);
        assert_eq!(
            discover_root(&pod, &session).await,
            Some("https://bob.example/".to_string())
        );

        let nobody = Session::new(Some("https://nobody.example/card#me".into()), None);
        assert_eq!(discover_root(&pod, &nobody).await, None);
    }
}
