//! Domain models for binowner
//!
//! This module contains pure domain objects parsed from update server documents.
//! These types are free of network concerns and hold the parsing rules for each format.

pub mod bundle;
pub mod manifest;
pub mod ownership;

pub use bundle::{Bundle, BundleIndex};
pub use manifest::Manifest;
pub use ownership::{Owner, OwnershipTable};
