//! Successful response wrapper and error-body decoding.

use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// A 2xx response, fully read.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON. An empty body decodes to `null`.
    pub fn json(&self) -> Result<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body).map_err(|e| {
            ClientError::InvalidResponse(format!("{} returned invalid JSON: {e}", self.url))
        })
    }

    /// Read a header as text. Names are case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Deserialize)]
struct Envelope {
    error: EnvelopeError,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeError {
    code: Option<u16>,
    message: Option<String>,
    #[serde(default)]
    constraint_violations: Vec<Violation>,
}

#[derive(Deserialize)]
struct Violation {
    path: Option<String>,
    message: Option<String>,
}

/// Flatten a Dynatrace error envelope into one line, or return the raw body.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(envelope) = serde_json::from_str::<Envelope>(body) else {
        return body.to_string();
    };

    let error = envelope.error;
    let mut message = error.message.unwrap_or_else(|| "unknown error".to_string());
    if let Some(code) = error.code {
        message = format!("{message} (code {code})");
    }
    for violation in error.constraint_violations {
        let text = violation.message.unwrap_or_default();
        match violation.path {
            Some(path) if !path.is_empty() => message.push_str(&format!("; {path}: {text}")),
            _ => message.push_str(&format!("; {text}")),
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_flattens_envelope() {
        let body = r#"{"error":{"code":400,"message":"Constraints violated.","constraintViolations":[{"path":"name","message":"must not be null","parameterLocation":"PAYLOAD_BODY"}]}}"#;
        assert_eq!(
            error_message(body),
            "Constraints violated. (code 400); name: must not be null"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }

    #[test]
    fn test_empty_body_is_null() {
        let response = ApiResponse {
            status: 204,
            url: "https://x/api/v2/apiTokens/1".to_string(),
            headers: HeaderMap::new(),
            body: String::new(),
        };
        assert_eq!(response.json().unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_json_is_invalid_response() {
        let response = ApiResponse {
            status: 200,
            url: "https://x/api/v2/entities".to_string(),
            headers: HeaderMap::new(),
            body: "{not json".to_string(),
        };
        assert!(matches!(response.json(), Err(ClientError::InvalidResponse(_))));
    }
}
