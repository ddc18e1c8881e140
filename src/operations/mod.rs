//! Operations module for resolving binary owners
//!
//! This module provides the high-level ResolveOperation, which coordinates:
//! - Update server access (from update module)
//! - Ownership resolution (from ownership module)
//! - UI: Progress reporting (from progress module)

pub mod resolve;

pub use resolve::{ResolveOperation, ResolveOptions};
