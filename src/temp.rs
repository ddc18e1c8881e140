//! Scoped working directory for a run
//!
//! The directory lives under an absolute temp base, so it is never created
//! under the current working directory (e.g. when TMPDIR=tmp or TMPDIR=./tmp),
//! and is removed when the returned guard drops.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, fs};

/// Prefix of working directory names
const WORKING_DIR_PREFIX: &str = "binowner-";

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create the working directory of a run
pub fn working_dir() -> Result<TempDir> {
    let base = temp_dir_base();
    let dir = tempfile::Builder::new()
        .prefix(WORKING_DIR_PREFIX)
        .tempdir_in(&base)
        .map_err(|e| {
            fs::io_error(format!(
                "Failed to create working directory in {}: {}",
                base.display(),
                e
            ))
        })?;
    tracing::debug!(path = %dir.path().display(), "created working directory");
    Ok(dir)
}
