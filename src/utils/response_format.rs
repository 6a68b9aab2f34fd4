// JSON envelope for errors raised by the global middleware layers

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard JSON error format
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "OK", "REQUEST_TIMEOUT")
    pub code: u16,               // HTTP status code
    pub data: Value,             // Response payload
    pub messages: Vec<String>,   // Informational messages
    pub date: String,            // ISO timestamp
}

impl ResponseFormat {
    /// Creates an envelope for `status` stamped with the current time
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: status_label(status),
            code: status.as_u16(),
            data: Value::Null,
            messages: Vec::new(),
            date: Utc::now().to_rfc3339(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

/// "Request Timeout" -> "REQUEST_TIMEOUT"
pub fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

impl IntoResponse for ResponseFormat {
    fn into_response(self) -> Response {
        let status: StatusCode =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let json_body: Vec<u8> = serde_json::to_vec(&self).unwrap_or_else(|_| b"{}".to_vec());

        (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            json_body,
        )
            .into_response()
    }
}
