use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};
use crate::domain::error::UploadError;

pub const CONFIG_PATH_ENV: &str = "UPLOADER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub pwd: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuthWrapRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub creds: Credentials,
    #[serde(default)]
    pub wrap_scope: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesApiConfig {
    #[serde(default)]
    pub root_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Overrides the command-line format hint when set.
    #[serde(default)]
    pub file_format: Option<String>,
    #[serde(default)]
    pub oauth_wrap_request: OAuthWrapRequest,
    #[serde(default)]
    pub files_api: FilesApiConfig,
    /// Log the authorization header in clear at debug level.
    #[serde(default)]
    pub log_authorization: bool,
    /// Exit with a per-kind status instead of always 0.
    #[serde(default)]
    pub exit_codes: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Reads the YAML file named by `UPLOADER_CONFIG` (or `config.yaml`) and
    /// applies environment overrides.
    pub fn load() -> Result<Self, UploadError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, UploadError> {
        debug!("Loading configuration from {}", path.display());
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let config = Self::from_yaml(&raw)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Configuration file {} not found, using defaults", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(UploadError::Config(format!("{}: {}", path.display(), e))),
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self, UploadError> {
        serde_yaml::from_str(raw).map_err(|e| UploadError::Config(e.to_string()))
    }

    /// Environment values win over the file. `lookup` is injected so tests
    /// don't touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("UPLOADER_FILE_FORMAT") {
            self.file_format = Some(v);
        }
        if let Some(v) = lookup("OAUTH_WRAP_URL") {
            self.oauth_wrap_request.url = v;
        }
        if let Some(v) = lookup("OAUTH_WRAP_UID") {
            self.oauth_wrap_request.creds.uid = v;
        }
        if let Some(v) = lookup("OAUTH_WRAP_PWD") {
            self.oauth_wrap_request.creds.pwd = v;
        }
        if let Some(v) = lookup("OAUTH_WRAP_SCOPE") {
            self.oauth_wrap_request.wrap_scope = v;
        }
        if let Some(v) = lookup("FILES_API_ROOT_URL") {
            self.files_api.root_url = v;
        }
    }
}
