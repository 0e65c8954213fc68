//! Browser implementation of the pod collaborators.

use podview_core::pod::{self, discover_root};
use podview_core::{
    ContainerSource, PodError, ResourceCreator, ResourceFetcher, RootResolver, Session,
};

use crate::config::content_type::{BASIC_CONTAINER_LINK, TURTLE};
use crate::utils::fetch::{self, Outgoing};

/// Talks to a Solid pod through `fetch`, relying on the browser's
/// credentials for authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct PodClient;

impl ResourceFetcher for PodClient {
    async fn fetch_text(&self, url: &str) -> Result<String, PodError> {
        tracing::debug!(%url, "fetching resource");
        Ok(fetch::fetch_text(url, &[]).await?)
    }
}

impl ContainerSource for PodClient {
    async fn contained_resources(&self, folder_url: &str) -> Result<Vec<String>, PodError> {
        let body = fetch::fetch_text(folder_url, &[("Accept", TURTLE)]).await?;
        Ok(pod::contained_resources_in(folder_url, &body))
    }
}

impl ResourceCreator for PodClient {
    async fn create_container(&self, url: &str) -> Result<(), PodError> {
        let headers = [("Content-Type", TURTLE), ("Link", BASIC_CONTAINER_LINK)];
        fetch::send(&Outgoing::put(url, &headers, "")).await?;
        tracing::info!(%url, "created container");
        Ok(())
    }

    async fn create_file(&self, url: &str, body: &str) -> Result<(), PodError> {
        let headers = [("Content-Type", TURTLE)];
        fetch::send(&Outgoing::put(url, &headers, body)).await?;
        tracing::info!(%url, "created file");
        Ok(())
    }
}

impl RootResolver for PodClient {
    async fn resolve_root(&self, session: &Session) -> Option<String> {
        discover_root(self, session).await
    }
}
