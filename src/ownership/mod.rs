//! Binary ownership resolution
//!
//! This module handles:
//! - Scoring bundles as owners of a binary (see [`score`])
//! - Deciding whether a newly seen bundle takes over a binary
//! - Walking manifests in an order that leaves denied bundles for last

pub mod policy;
pub mod score;

pub use policy::BundlePolicy;

use crate::domain::{Bundle, BundleIndex, Manifest, OwnershipTable};
use policy::SEED_OVERRIDES;
use score::adjusted_score;

/// Ownership state of a single run
#[derive(Debug, Default)]
pub struct OwnershipResolver {
    policy: BundlePolicy,
    table: OwnershipTable,
}

impl OwnershipResolver {
    pub fn new(policy: BundlePolicy) -> Self {
        Self {
            policy,
            table: OwnershipTable::default(),
        }
    }

    #[allow(dead_code)]
    pub fn table(&self) -> &OwnershipTable {
        &self.table
    }

    pub fn into_table(self) -> OwnershipTable {
        self.table
    }

    /// Apply the manual overrides. Must run before any manifest is read.
    pub fn seed(&mut self) {
        for (bundle, binary) in SEED_OVERRIDES {
            self.declare(bundle, binary, 0);
        }
    }

    /// Record that `bundle`, of raw size `raw_size`, ships `binary`
    ///
    /// A binary seen for the first time, or shipped by a bundle of the same
    /// name, is assigned outright. Independently of that, the bundle then
    /// takes over when it scores lower or is allow-listed, unless the current
    /// owner is the binary's own bundle or allow-listed, or the bundle itself
    /// is denied.
    pub fn declare(&mut self, bundle: &str, binary: &str, raw_size: u64) {
        let score = adjusted_score(&self.policy, bundle, raw_size);

        if !self.table.contains(binary) || binary == bundle {
            tracing::trace!(binary, bundle, score, "assigning owner");
            self.table.assign(binary, bundle, score);
        }

        let Some(current) = self.table.get(binary) else {
            return;
        };
        let candidate_wins = current.score > score || self.policy.is_allowed(bundle);
        if candidate_wins
            && current.bundle != binary
            && !self.policy.is_denied(bundle)
            && !self.policy.is_allowed(&current.bundle)
        {
            tracing::trace!(
                binary,
                bundle,
                score,
                previous = %current.bundle,
                "taking over owner"
            );
            self.table.assign(binary, bundle, score);
        }
    }

    /// Declare every binary a bundle's manifest ships
    pub fn read_manifest(&mut self, bundle: &str, manifest: &Manifest) {
        for (binary, size) in manifest.binaries() {
            self.declare(bundle, binary, size);
        }
    }

    /// Bundles in the order their manifests must be read: every bundle not on
    /// the deny list in lexical order, then the denied ones in lexical order
    pub fn processing_order(&self, index: &BundleIndex) -> Vec<Bundle> {
        let (denied, preferred): (Vec<Bundle>, Vec<Bundle>) = index
            .iter()
            .partition(|bundle| self.policy.is_denied(&bundle.name));
        preferred.into_iter().chain(denied).collect()
    }
}
