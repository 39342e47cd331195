use async_trait::async_trait;
use tracing::{debug, warn};
use crate::domain::{error::UploadError, ports::ContentParser};
use crate::infrastructure::parsers::json_parser;

/// Format value that switches parsing on. Anything else is uploaded raw.
pub const STRUCTURED_FORMAT: &str = "json";

#[derive(Debug, Default)]
pub struct ParserAdapter;

impl ParserAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentParser for ParserAdapter {
    fn is_structured(&self, file_format: &str) -> bool {
        file_format == STRUCTURED_FORMAT
    }

    async fn parse(&self, file_bytes: &[u8], file_format: &str) -> Result<serde_json::Value, UploadError> {
        debug!("Parsing {} bytes as {}", file_bytes.len(), file_format);
        if !self.is_structured(file_format) {
            warn!("Unsupported structured format: {}", file_format);
            return Err(UploadError::Parse(format!("unsupported file format: {}", file_format)));
        }
        json_parser::parse_json(file_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_is_the_only_structured_format() {
        let parser = ParserAdapter::new();
        assert!(parser.is_structured("json"));
        for other in ["txt", "csv", "yaml", "yml", "JSON", ""] {
            assert!(!parser.is_structured(other), "{} should stay raw", other);
        }
    }

    #[tokio::test]
    async fn parses_json_and_rejects_other_formats() {
        let parser = ParserAdapter::new();
        assert_eq!(parser.parse(br#"{"a":1}"#, "json").await.unwrap(), json!({"a": 1}));
        assert!(matches!(parser.parse(b"a: 1", "yaml").await, Err(UploadError::Parse(_))));
    }
}
