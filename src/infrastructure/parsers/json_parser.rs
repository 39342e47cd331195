use tracing::debug;
use crate::domain::error::UploadError;

pub fn parse_json(bytes: &[u8]) -> Result<serde_json::Value, UploadError> {
    serde_json::from_slice(bytes).map_err(|e| {
        debug!("invalid json file detected: {}", e);
        UploadError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_round_trips_semantically() {
        assert_eq!(parse_json(br#"{"a":1}"#).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn broken_json_reports_position() {
        let err = parse_json(b"{bad json").unwrap_err();
        match err {
            UploadError::Parse(msg) => assert!(msg.contains("line 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
