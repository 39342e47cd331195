use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("failed to obtain authorization: {0}")]
    Auth(String),

    #[error("error uploading file: {0}")]
    Upload(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl UploadError {
    /// Process exit status used when `exit_codes` is enabled.
    pub fn exit_code(&self) -> i32 {
        match self {
            UploadError::InvalidPath(_) => 1,
            UploadError::Read { .. } => 2,
            UploadError::Parse(_) => 3,
            UploadError::Auth(_) => 4,
            UploadError::Upload(_) => 5,
            UploadError::Config(_) => 6,
        }
    }
}
