use async_trait::async_trait;
use std::path::Path;
use tracing::debug;
use crate::domain::{error::UploadError, ports::FileReader};

#[derive(Debug, Default)]
pub struct LocalFileReader;

impl LocalFileReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileReader for LocalFileReader {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, UploadError> {
        debug!("Reading file: {}", path.display());
        tokio::fs::read(path).await.map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
