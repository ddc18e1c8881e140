//! Static bundle lists that bias ownership decisions

use std::collections::HashSet;

/// Bundles preferred as owners of anything they ship
pub const ALLOW_LIST: &[&str] = &[
    "python3-basic",
    "python-extras",
    "perl-basic",
    "perl-extras",
    "c-basic",
    "R-basic",
    "jupyter",
    "find",
    "sysadmin-basic",
];

/// Bundles considered only as a last resort
pub const DENY_LIST: &[&str] = &[
    "os-clr-on-clr",
    "os-clr-on-clr-dev",
    "os-utils-gui",
    "os-testsuite-phoronix-server",
    "os-testsuite-phoronix-desktop",
    "os-testsuite-phoronix",
    "os-testsuite-automotive",
    "os-testsuite",
    "os-testsuite-0day",
    "os-installer",
    "service-os",
    "service-os-dev",
    // not general purpose
    "software-defined-cockpit",
    "devpkg-R",
    "dnf",
    "telemetrics",
    "os-cloudguest-azure",
    "os-cloudguest-aws",
    "os-cloudguest-gce",
    "os-cloudguest-oracle",
    // ships mkfs.ext4
    "os-cloudguest-aliyun",
];

/// `(bundle, binary)` pairs declared at size 0 before any manifest is read
pub const SEED_OVERRIDES: &[(&str, &str)] = &[
    ("python3-basic", "python"),
    ("python3-basic", "python3"),
    ("python3-basic", "python3.7"),
    ("python2-basic", "python2.7"),
    ("c-basic", "pkg-config"),
    ("R-basic", "R"),
    ("R-basic", "R-script"),
];

/// Allow and deny lists for one run
#[derive(Debug, Clone)]
pub struct BundlePolicy {
    allow: HashSet<String>,
    deny: HashSet<String>,
}

impl BundlePolicy {
    pub fn new<A, D>(allow: A, deny: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            allow: allow.into_iter().map(Into::into).collect(),
            deny: deny.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, bundle: &str) -> bool {
        self.allow.contains(bundle)
    }

    pub fn is_denied(&self, bundle: &str) -> bool {
        self.deny.contains(bundle)
    }
}

impl Default for BundlePolicy {
    fn default() -> Self {
        Self::new(ALLOW_LIST.iter().copied(), DENY_LIST.iter().copied())
    }
}
