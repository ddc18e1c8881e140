//! Update server request errors

use super::BinownerError;

/// Creates a request failed error for a transport-level failure
pub fn request_failed(url: impl Into<String>, reason: impl Into<String>) -> BinownerError {
    BinownerError::HttpRequestFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a non-success HTTP status
pub fn status(url: impl Into<String>, status: u16) -> BinownerError {
    BinownerError::HttpStatus {
        url: url.into(),
        status,
    }
}

/// Creates an HTTP client construction error
pub fn client_failed(reason: impl Into<String>) -> BinownerError {
    BinownerError::HttpClientFailed {
        reason: reason.into(),
    }
}
