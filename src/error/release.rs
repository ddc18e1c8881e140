//! Release resolution errors

use super::BinownerError;

/// Creates an error for a blank latest-release document
pub fn empty(url: impl Into<String>) -> BinownerError {
    BinownerError::ReleaseEmpty { url: url.into() }
}
