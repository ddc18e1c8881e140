//! Command implementations for binowner CLI

pub mod completions;
pub mod resolve;
pub mod version;
