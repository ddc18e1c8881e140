//! Owner score adjustment
//!
//! A bundle's raw score for a binary is its declared content size: smaller
//! bundles make better owners. The rules below adjust that score by bundle
//! name. Every matching rule applies, in table order, each working on the
//! result of the previous one.

use super::policy::BundlePolicy;

/// A predicate on a bundle and the adjustment applied when it holds
struct ScoreRule {
    applies: fn(&BundlePolicy, &str) -> bool,
    adjust: fn(f64) -> f64,
}

const RULES: &[ScoreRule] = &[
    // last resort
    ScoreRule {
        applies: is_denied,
        adjust: |s| s * 100.0 + 5_000_000.0,
    },
    ScoreRule {
        applies: is_development,
        adjust: |s| s * 80.0 + 2_000_000.0,
    },
    ScoreRule {
        applies: is_allowed,
        adjust: |s| s / 10.0,
    },
    ScoreRule {
        applies: |_, bundle| bundle.ends_with("-basic"),
        adjust: |s| s * 0.90,
    },
    ScoreRule {
        applies: |_, bundle| bundle.ends_with("-extras"),
        adjust: |s| s * 1.10,
    },
    ScoreRule {
        applies: |_, bundle| bundle.ends_with("-dev"),
        adjust: |s| s * 2.0,
    },
    ScoreRule {
        applies: |_, bundle| bundle.starts_with("devpkg-"),
        adjust: |s| s * 1.3,
    },
];

fn is_denied(policy: &BundlePolicy, bundle: &str) -> bool {
    policy.is_denied(bundle)
}

fn is_allowed(policy: &BundlePolicy, bundle: &str) -> bool {
    policy.is_allowed(bundle)
}

fn is_development(_: &BundlePolicy, bundle: &str) -> bool {
    bundle.ends_with("-dev") || bundle.starts_with("devpkg-")
}

/// Score of `bundle` as owner of a binary, given the bundle's raw size
#[allow(clippy::cast_precision_loss)]
pub fn adjusted_score(policy: &BundlePolicy, bundle: &str, raw_size: u64) -> f64 {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(policy, bundle))
        .fold(raw_size as f64, |score, rule| (rule.adjust)(score))
}
