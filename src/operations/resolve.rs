//! Resolve operation
//!
//! Runs the whole pipeline for one release: release, bundle index, every
//! manifest, then ownership. Manifests are all fetched before any is read,
//! and any failed request aborts the run.

use crate::domain::{Bundle, Manifest, OwnershipTable};
use crate::error::Result;
use crate::ownership::{BundlePolicy, OwnershipResolver};
use crate::progress::ProgressDisplay;
use crate::update::{self, Fetch, UpdateServer};

/// Options for the resolve operation
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Release to resolve instead of the latest one
    pub release: Option<String>,
    /// Show a progress bar while fetching manifests
    pub show_progress: bool,
}

/// Resolves binary owners for one release
pub struct ResolveOperation<'a, F: Fetch> {
    fetcher: &'a F,
    server: &'a UpdateServer,
    policy: BundlePolicy,
}

impl<'a, F: Fetch> ResolveOperation<'a, F> {
    pub fn new(fetcher: &'a F, server: &'a UpdateServer) -> Self {
        Self {
            fetcher,
            server,
            policy: BundlePolicy::default(),
        }
    }

    #[cfg(test)]
    pub fn with_policy(mut self, policy: BundlePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute the resolve operation
    pub fn execute(self, options: &ResolveOptions) -> Result<OwnershipTable> {
        let Self {
            fetcher,
            server,
            policy,
        } = self;

        let release = match &options.release {
            Some(release) => release.clone(),
            None => update::latest_release(fetcher, server)?,
        };
        tracing::info!(release = %release, "resolving binary owners");

        let index = update::read_index(fetcher, server, &release)?;

        let mut resolver = OwnershipResolver::new(policy);
        resolver.seed();

        let order = resolver.processing_order(&index);
        let manifests = fetch_manifests(fetcher, server, &order, options.show_progress)?;

        for (bundle, manifest) in order.iter().zip(&manifests) {
            if let Some(manifest) = manifest {
                resolver.read_manifest(&bundle.name, manifest);
            }
        }

        let table = resolver.into_table();
        tracing::info!(binaries = table.len(), "resolved binary owners");
        Ok(table)
    }
}

/// Fetch and parse every manifest before any is read
fn fetch_manifests(
    fetcher: &impl Fetch,
    server: &UpdateServer,
    bundles: &[Bundle],
    show_progress: bool,
) -> Result<Vec<Option<Manifest>>> {
    let progress = if show_progress {
        ProgressDisplay::new(bundles.len() as u64)
    } else {
        ProgressDisplay::hidden()
    };

    let mut manifests = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        progress.update_bundle(&bundle.name);
        let text = match update::fetch_manifest(fetcher, server, bundle) {
            Ok(text) => text,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };
        manifests.push(text.as_deref().map(Manifest::parse));
        progress.inc_bundle();
    }
    progress.finish();

    Ok(manifests)
}
