//! Version command implementation

use crate::error::Result;
use crate::update::{DEFAULT_BASE_URL, DEFAULT_LATEST_URL};

/// Run version command
pub fn run() -> Result<()> {
    println!("binowner {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!();
    println!("Update server:");
    println!("  Content: {DEFAULT_BASE_URL}");
    println!("  Latest release: {DEFAULT_LATEST_URL}");

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported rustc declared by the package
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
