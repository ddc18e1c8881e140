//! Error types and handling for binowner
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`http`]: Update server request errors
//! - [`release`]: Release resolution errors
//! - [`fs`]: File system errors
//! - [`output`]: Report output errors

pub mod fs;
pub mod http;
pub mod output;
pub mod release;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for binowner operations
#[derive(Error, Diagnostic, Debug)]
pub enum BinownerError {
    // Update server errors
    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(
        code(binowner::http::request_failed),
        help("Check network connectivity and that the update server URL is correct")
    )]
    HttpRequestFailed { url: String, reason: String },

    #[error("Request to {url} returned HTTP {status}")]
    #[diagnostic(
        code(binowner::http::status),
        help("The release or bundle may not exist on the update server")
    )]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to create HTTP client: {reason}")]
    #[diagnostic(code(binowner::http::client_failed))]
    HttpClientFailed { reason: String },

    // Release errors
    #[error("Latest release at {url} is empty")]
    #[diagnostic(
        code(binowner::release::empty),
        help("Pass --release to resolve a specific release")
    )]
    ReleaseEmpty { url: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(binowner::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(binowner::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Output errors
    #[error("Failed to write report: {reason}")]
    #[diagnostic(code(binowner::output::failed))]
    OutputFailed { reason: String },
}

impl From<std::io::Error> for BinownerError {
    fn from(err: std::io::Error) -> Self {
        BinownerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BinownerError {
    fn from(err: serde_json::Error) -> Self {
        BinownerError::OutputFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BinownerError>;
