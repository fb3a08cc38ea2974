//! Error types for path model operations

use thiserror::Error;

/// The error type for path model operations
///
/// Path algebra itself never fails; only the directory enumeration used
/// by the consecutive name generator can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A directory could not be enumerated (permission denied, I/O failure, ...)
    #[error("Directory unavailable: {path} ({message})")]
    DirectoryUnavailable { path: String, message: String },
}

impl PathError {
    /// Build a [`PathError::DirectoryUnavailable`] from an I/O failure on `path`
    pub fn directory_unavailable(path: &str, err: &std::io::Error) -> Self {
        PathError::DirectoryUnavailable {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for path model operations
pub type Result<T> = std::result::Result<T, PathError>;
