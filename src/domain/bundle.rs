//! Bundle index types
//!
//! The bundle index (the "manifest of manifests", `Manifest.MoM`) lists every
//! bundle of a release together with the version its manifest was last
//! written at.

use std::collections::BTreeMap;

/// Substring marking an incremental manifest that carries no full file listing
pub const INCREMENT_MARKER: &str = ".I.";

/// A bundle and the manifest version it was captured at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub version: String,
}

impl Bundle {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Whether this names an incremental manifest, which is never fetched
    pub fn is_incremental(&self) -> bool {
        is_incremental(&self.name)
    }
}

/// Whether a bundle name carries the increment marker
pub fn is_incremental(name: &str) -> bool {
    name.contains(INCREMENT_MARKER)
}

/// Bundle name to manifest version, kept in lexical name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleIndex {
    bundles: BTreeMap<String, String>,
}

impl BundleIndex {
    /// Parse a `Manifest.MoM` document.
    ///
    /// Every tab-separated line with more than two fields declares a bundle:
    /// field 2 is the manifest version and field 3 the bundle name. Shorter
    /// lines are headers and are skipped. A later declaration of the same
    /// bundle replaces an earlier one.
    pub fn parse(content: &str) -> Self {
        let mut index = Self::default();

        for line in content.split('\n') {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() <= 2 {
                continue;
            }
            let (Some(version), Some(name)) = (fields.get(2), fields.get(3)) else {
                tracing::debug!(line, "skipping index record without a bundle name");
                continue;
            };
            index.insert(Bundle::new(*name, *version));
        }

        index
    }

    pub fn insert(&mut self, bundle: Bundle) {
        self.bundles.insert(bundle.name, bundle.version);
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<Bundle> {
        self.bundles
            .get_key_value(name)
            .map(|(name, version)| Bundle::new(name.as_str(), version.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Bundles in lexical name order
    pub fn iter(&self) -> impl Iterator<Item = Bundle> + '_ {
        self.bundles
            .iter()
            .map(|(name, version)| Bundle::new(name.as_str(), version.as_str()))
    }
}
