use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, multipart, Client, Url};
use tracing::debug;
use crate::domain::{
    error::UploadError,
    models::{Authorization, FileContent, UploadResult},
    ports::FilesApi,
};

pub struct HttpFilesApi {
    client: Client,
    endpoint: Url,
}

impl HttpFilesApi {
    pub fn new(client: Client, root_url: &str) -> Result<Self, UploadError> {
        let endpoint = format!("{}/files", root_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| UploadError::Config(format!("invalid files api root url '{}': {}", root_url, e)))?;
        debug!("Files API endpoint: {}", endpoint);
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FilesApi for HttpFilesApi {
    async fn upload(&self, authorization: &Authorization, file_name: &str, content: &FileContent) -> Result<UploadResult, UploadError> {
        let request = self.client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, authorization.expose());

        let request = match content {
            FileContent::Structured(value) => {
                debug!("Uploading {} as JSON", file_name);
                request.json(value)
            },
            FileContent::Raw(bytes) => {
                debug!("Uploading {} as multipart ({} bytes)", file_name, bytes.len());
                let part = multipart::Part::bytes(bytes.clone())
                    .file_name(file_name.to_string())
                    .mime_str("application/octet-stream")
                    .map_err(|e| UploadError::Upload(e.to_string()))?;
                request.multipart(multipart::Form::new().part("file", part))
            },
        };

        let response = request.send().await.map_err(|e| {
            debug!("Upload request to {} failed: {}", self.endpoint, e);
            UploadError::Upload(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| UploadError::Upload(e.to_string()))?;
        if !status.is_success() {
            return Err(UploadError::Upload(format!("{} - {}", status, text)));
        }

        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        Ok(UploadResult { status: status.as_u16(), body })
    }
}
