//! File system errors

use super::BinownerError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BinownerError {
    BinownerError::IoError {
        message: message.into(),
    }
}
