//! SSE line classification and event envelope parsing.
//!
//! The council backend frames every event as a single line of the form
//! `data: <json>`, where the JSON object carries a `type` field naming
//! the event kind. The client does not interpret individual kinds; it
//! hands the whole object to the caller.

use serde_json::Value;
use thiserror::Error;

/// Represents a classified SSE line
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Data payload (e.g., "data: {\"type\": \"stage\"}")
    Data(String),
    /// Empty line between events
    Empty,
    /// Anything else: comments, `event:`/`id:`/`retry:` fields. The
    /// backend never requires these to be interpreted.
    Ignored(String),
}

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(rest) = line.strip_prefix("data:") {
        return SseLine::Data(rest.trim().to_string());
    }

    SseLine::Ignored(line.to_string())
}

/// One parsed event from the stream.
///
/// `kind` is the value of the payload's `type` field; `payload` is the
/// complete parsed object, `type` field included, so callers can branch
/// on `kind` and pull whatever event-specific fields they need.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEvent {
    pub kind: String,
    pub payload: Value,
}

impl StreamEvent {
    /// Parse the JSON payload of a `data:` line into an event.
    pub fn parse(data: &str) -> Result<Self, EventParseError> {
        let payload: Value =
            serde_json::from_str(data).map_err(|e| EventParseError::InvalidJson(e.to_string()))?;
        let kind = payload
            .get("type")
            .and_then(Value::as_str)
            .ok_or(EventParseError::MissingKind)?
            .to_string();
        Ok(Self { kind, payload })
    }
}

/// Errors that can occur while parsing a single event line.
///
/// These are line-level failures: the streaming consumer logs them and
/// keeps reading, per the two-tier error policy described on
/// `CouncilError`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventParseError {
    /// The data payload was not valid JSON
    #[error("invalid JSON in event payload: {0}")]
    InvalidJson(String),
    /// The payload parsed but has no string `type` field
    #[error("event payload has no `type` field")]
    MissingKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_data_line() {
        assert_eq!(
            parse_sse_line("data: {\"type\":\"a\"}"),
            SseLine::Data("{\"type\":\"a\"}".to_string())
        );
        assert_eq!(
            parse_sse_line("data:{\"x\":1}"),
            SseLine::Data("{\"x\":1}".to_string())
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_sse_line(""), SseLine::Empty);
    }

    #[test]
    fn test_other_sse_fields_are_ignored() {
        assert_eq!(
            parse_sse_line(": keep-alive"),
            SseLine::Ignored(": keep-alive".to_string())
        );
        assert_eq!(
            parse_sse_line("event: message"),
            SseLine::Ignored("event: message".to_string())
        );
        assert_eq!(
            parse_sse_line("retry: 3000"),
            SseLine::Ignored("retry: 3000".to_string())
        );
    }

    #[test]
    fn test_parse_event_with_extra_fields() {
        let event = StreamEvent::parse(
            r#"{"type":"model_response","model":"openai/gpt-4o","content":"hi"}"#,
        )
        .unwrap();
        assert_eq!(event.kind, "model_response");
        assert_eq!(event.payload["model"], json!("openai/gpt-4o"));
        assert_eq!(event.payload["content"], json!("hi"));
        // The discriminator stays in the payload
        assert_eq!(event.payload["type"], json!("model_response"));
    }

    #[test]
    fn test_parse_minimal_event() {
        let event = StreamEvent::parse(r#"{"type":"a","x":1}"#).unwrap();
        assert_eq!(event.kind, "a");
        assert_eq!(event.payload["x"], json!(1));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = StreamEvent::parse("{not valid json");
        assert!(matches!(result, Err(EventParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_missing_type_field() {
        assert_eq!(
            StreamEvent::parse(r#"{"content":"orphan"}"#),
            Err(EventParseError::MissingKind)
        );
        // A non-string type is just as unusable as a missing one
        assert_eq!(
            StreamEvent::parse(r#"{"type":42}"#),
            Err(EventParseError::MissingKind)
        );
    }

    #[test]
    fn test_event_parse_error_display() {
        let err = EventParseError::InvalidJson("expected value".to_string());
        assert!(format!("{}", err).contains("invalid JSON"));
        assert!(format!("{}", EventParseError::MissingKind).contains("`type`"));
    }
}
