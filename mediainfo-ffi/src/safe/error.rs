//! Error types for the safe MediaInfo wrapper.

use thiserror::Error;

/// MediaInfo wrapper error type.
///
/// The native library reports "no such file", "unsupported format" and
/// "missing parameter" through its return values, so those never show up
/// here: `open` returns `false` and lookups return an empty string. Only
/// lifecycle misuse and allocation failure are errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaInfoError {
    /// `MediaInfo_New` returned NULL
    #[error("Memory allocation failed")]
    Alloc,

    /// The handle was already released by `dispose`
    #[error("MediaInfo handle has already been disposed")]
    Disposed,

    /// Invalid argument provided
    #[error("Invalid argument: {0}")]
    InvalidArg(String),
}

/// Result type alias for operations that may fail with MediaInfoError
pub type Result<T> = std::result::Result<T, MediaInfoError>;

/// Reject strings that would be truncated at the FFI boundary.
pub(crate) fn check_arg<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if crate::manual::wide::has_interior_nul(value) {
        Err(MediaInfoError::InvalidArg(format!("{what} contains null character")))
    } else {
        Ok(value)
    }
}
