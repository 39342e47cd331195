use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use tracing::debug;
use crate::config::OAuthWrapRequest;
use crate::domain::{error::UploadError, models::Authorization, ports::TokenProvider};

/// OAuth WRAP (v0.9) client: trades a name/password pair and a scope for an
/// access token and formats it as an `Authorization` header value.
pub struct WrapTokenClient {
    client: Client,
    request: OAuthWrapRequest,
}

impl WrapTokenClient {
    pub fn new(client: Client, request: OAuthWrapRequest) -> Self {
        debug!("Initializing OAuth WRAP client for {}", request.url);
        Self { client, request }
    }
}

#[async_trait]
impl TokenProvider for WrapTokenClient {
    async fn get_auth_header(&self) -> Result<Authorization, UploadError> {
        debug!("Requesting access token from {} for scope {}", self.request.url, self.request.wrap_scope);

        let form = [
            ("wrap_name", self.request.creds.uid.as_str()),
            ("wrap_password", self.request.creds.pwd.as_str()),
            ("wrap_scope", self.request.wrap_scope.as_str()),
        ];

        let response = self.client
            .post(&self.request.url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                debug!("Token request to {} failed: {}", self.request.url, e);
                UploadError::Auth(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| UploadError::Auth(e.to_string()))?;
        if !status.is_success() {
            return Err(UploadError::Auth(format!("{} - {}", status, body)));
        }

        let fields: HashMap<String, String> = serde_urlencoded::from_str(&body)
            .map_err(|e| UploadError::Auth(format!("malformed token response: {}", e)))?;
        let token = fields
            .get("wrap_access_token")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| UploadError::Auth("token response has no wrap_access_token".to_string()))?;

        if let Some(expires_in) = fields.get("wrap_access_token_expires_in") {
            debug!("Access token expires in {}s", expires_in);
        }

        Ok(Authorization::new(format!("WRAP access_token=\"{}\"", token)))
    }
}
