use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("MediaInfo error: {0}")]
    MediaInfo(#[from] mediainfo_ffi::MediaInfoError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("path does not exist: {0}")]
    MissingPath(String),
    #[error("path is not a file: {0}")]
    NotAFile(String),
    #[error("path is not a directory: {0}")]
    NotADirectory(String),
    #[error("MediaInfo could not parse: {0}")]
    Unsupported(String),
    #[error("invalid option {0:?}, expected NAME=VALUE")]
    InvalidOption(String),
}
