//! Progress bar display for manifest downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress of fetching bundle manifests
///
/// Draws to stderr and stays hidden when stderr is not a terminal, so the
/// report on stdout is never interleaved with it.
pub struct ProgressDisplay {
    bundle_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total_bundles: u64) -> Self {
        let bundle_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bundle_pb = ProgressBar::new(total_bundles);
        bundle_pb.set_style(bundle_style);

        Self { bundle_pb }
    }

    /// A display that never draws
    pub fn hidden() -> Self {
        Self {
            bundle_pb: ProgressBar::hidden(),
        }
    }

    /// Update to show the bundle whose manifest is being fetched
    pub fn update_bundle(&self, bundle_name: &str) {
        self.bundle_pb.set_message(bundle_name.to_string());
    }

    /// Increment bundle progress
    pub fn inc_bundle(&self) {
        self.bundle_pb.inc(1);
    }

    pub fn finish(&self) {
        self.bundle_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bundle_pb.abandon();
    }
}
