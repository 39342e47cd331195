use async_trait::async_trait;
use std::path::Path;
use crate::domain::{
    error::UploadError,
    models::{Authorization, FileContent, UploadResult},
};

#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, UploadError>;
}

#[async_trait]
pub trait ContentParser: Send + Sync {
    fn is_structured(&self, file_format: &str) -> bool;
    async fn parse(&self, file_bytes: &[u8], file_format: &str) -> Result<serde_json::Value, UploadError>;
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_auth_header(&self) -> Result<Authorization, UploadError>;
}

#[async_trait]
pub trait FilesApi: Send + Sync {
    async fn upload(&self, authorization: &Authorization, file_name: &str, content: &FileContent) -> Result<UploadResult, UploadError>;
}
