//! Report output errors

use super::BinownerError;

/// Creates an output failed error
#[allow(dead_code)]
pub fn failed(reason: impl Into<String>) -> BinownerError {
    BinownerError::OutputFailed {
        reason: reason.into(),
    }
}
