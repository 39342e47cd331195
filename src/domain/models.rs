use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_FORMAT_HINT: &str = "txt";

#[derive(Debug, Clone)]
pub struct InvocationArgs {
    pub file_path: PathBuf,
    pub format_hint: String,
}

impl InvocationArgs {
    pub fn new(file_path: impl Into<PathBuf>, format_hint: Option<String>) -> Self {
        Self {
            file_path: file_path.into(),
            format_hint: format_hint.unwrap_or_else(|| DEFAULT_FORMAT_HINT.to_string()),
        }
    }

    /// Positional arguments after the program name: `<path> [format]`.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let file_path = args.next().unwrap_or_default();
        Self::new(file_path, args.next())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Raw(Vec<u8>),
    Structured(serde_json::Value),
}

/// Authorization header value returned by the token service.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization(String);

impl Authorization {
    pub fn new(header: impl Into<String>) -> Self {
        Self(header.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Authorization(<redacted>)")
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub status: u16,
    pub body: serde_json::Value,
}

impl fmt::Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status={} body={}", self.status, self.body)
    }
}
