use std::path::Path;
use std::sync::Arc;
use tracing::{info, debug, error, warn};
use crate::domain::{
    error::UploadError,
    models::{FileContent, InvocationArgs, UploadResult},
    ports::{FileReader, ContentParser, TokenProvider, FilesApi},
};

#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Parsing is switched on only by this value; the invocation's format
    /// hint is logged and nothing else.
    pub file_format: Option<String>,
    pub log_authorization: bool,
}

pub struct UploadService {
    file_reader: Arc<dyn FileReader>,
    content_parser: Arc<dyn ContentParser>,
    token_provider: Arc<dyn TokenProvider>,
    files_api: Arc<dyn FilesApi>,
    options: UploadOptions,
}

impl UploadService {
    pub fn new(
        file_reader: Arc<dyn FileReader>,
        content_parser: Arc<dyn ContentParser>,
        token_provider: Arc<dyn TokenProvider>,
        files_api: Arc<dyn FilesApi>,
        options: UploadOptions,
    ) -> Self {
        Self {
            file_reader,
            content_parser,
            token_provider,
            files_api,
            options,
        }
    }

    /// True only when `path` resolves to an existing regular file. The cause
    /// of a rejection is logged, never returned.
    pub fn validate_path(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => true,
            Ok(_) => {
                warn!("Path did not resolve to a file: {}", path.display());
                false
            },
            Err(e) => {
                warn!("Invalid path detected: {}; error: {}", path.display(), e);
                false
            }
        }
    }

    pub async fn run(&self, args: &InvocationArgs) -> Result<UploadResult, UploadError> {
        let path = args.file_path.as_path();
        debug!("path: {}", path.display());
        debug!("ext: {}", args.format_hint);

        // Step 1: Validate path
        // validate_path already logged the cause; this line names the path
        // rather than logging an empty message.
        if !self.validate_path(path) {
            error!("Refusing to upload invalid path: {}", path.display());
            return Err(UploadError::InvalidPath(path.to_path_buf()));
        }

        // Step 2: Read file
        let bytes = self.file_reader.read_file(path).await
            .map_err(|e| {
                error!("failed to read file: {}; error: {}", path.display(), e);
                e
            })?;
        info!("Read {} bytes from {}", bytes.len(), path.display());

        // Step 3: Parse structured content
        let content = self.load_content(bytes).await
            .map_err(|e| {
                error!("Failed to parse {}: {}", path.display(), e);
                e
            })?;

        // Step 4: Obtain authorization
        let authorization = self.token_provider.get_auth_header().await
            .map_err(|e| {
                error!("{}", e);
                e
            })?;
        if self.options.log_authorization {
            debug!("authorization: {}", authorization.expose());
        } else {
            debug!("authorization: {}", authorization);
        }

        // Step 5: Upload
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let result = self.files_api.upload(&authorization, &file_name, &content).await
            .map_err(|e| {
                error!("{}", e);
                e
            })?;

        info!("upload succeeded: {}", result);
        Ok(result)
    }

    async fn load_content(&self, bytes: Vec<u8>) -> Result<FileContent, UploadError> {
        let file_format = self.options.file_format.as_deref().unwrap_or_default();
        if !self.content_parser.is_structured(file_format) {
            debug!("Format '{}' is not structured, uploading raw content", file_format);
            return Ok(FileContent::Raw(bytes));
        }

        debug!("Parsing content as {}", file_format);
        let value = self.content_parser.parse(&bytes, file_format).await?;
        Ok(FileContent::Structured(value))
    }
}
