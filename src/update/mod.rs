//! Update server access
//!
//! This module handles:
//! - Building document URLs for a release and its bundles
//! - Resolving the latest release
//! - Fetching the bundle index (`Manifest.MoM`) and bundle manifests
//!
//! Documents are fetched through the [`Fetch`] trait so the pipeline can run
//! against the HTTP client or an in-memory server.

pub mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpFetcher;

use crate::domain::{Bundle, BundleIndex};
use crate::error::{Result, release};

/// Default location of release content
pub const DEFAULT_BASE_URL: &str = "https://cdn.download.clearlinux.org/update/";

/// Default location of the latest release identifier
pub const DEFAULT_LATEST_URL: &str =
    "https://download.clearlinux.org/update/version/formatstaging/latest";

/// Fetches a document as text
pub trait Fetch {
    /// GET `url` and decode the body, replacing invalid UTF-8.
    /// Any transport failure or non-success status is an error.
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Endpoints of an update server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateServer {
    base_url: String,
    latest_url: String,
}

impl UpdateServer {
    pub fn new(base_url: impl AsRef<str>, latest_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            latest_url: latest_url.into(),
        }
    }

    pub fn latest_url(&self) -> &str {
        &self.latest_url
    }

    /// URL of the bundle index of `release`
    pub fn index_url(&self, release: &str) -> String {
        format!("{}/{}/Manifest.MoM", self.base_url, release)
    }

    /// URL of a bundle's manifest, at the bundle's own version
    pub fn manifest_url(&self, bundle: &Bundle) -> String {
        format!(
            "{}/{}/Manifest.{}",
            self.base_url, bundle.version, bundle.name
        )
    }
}

impl Default for UpdateServer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_LATEST_URL)
    }
}

/// Fetch the identifier of the latest release
pub fn latest_release(fetcher: &impl Fetch, server: &UpdateServer) -> Result<String> {
    let url = server.latest_url();
    tracing::debug!(url, "resolving latest release");

    let id = fetcher.fetch_text(url)?.trim().to_string();
    if id.is_empty() {
        return Err(release::empty(url));
    }
    Ok(id)
}

/// Fetch and parse the bundle index of `release`
pub fn read_index(
    fetcher: &impl Fetch,
    server: &UpdateServer,
    release: &str,
) -> Result<BundleIndex> {
    let url = server.index_url(release);
    tracing::debug!(url = %url, "fetching bundle index");

    let index = BundleIndex::parse(&fetcher.fetch_text(&url)?);
    tracing::info!(release, bundles = index.len(), "read bundle index");
    Ok(index)
}

/// Fetch a bundle's manifest text
///
/// Incremental manifests carry no full file listing; they are skipped
/// without a request and yield `None`.
pub fn fetch_manifest(
    fetcher: &impl Fetch,
    server: &UpdateServer,
    bundle: &Bundle,
) -> Result<Option<String>> {
    if bundle.is_incremental() {
        tracing::debug!(bundle = %bundle.name, "skipping incremental manifest");
        return Ok(None);
    }

    let url = server.manifest_url(bundle);
    tracing::debug!(url = %url, "fetching manifest");
    fetcher.fetch_text(&url).map(Some)
}
