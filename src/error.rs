// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client error type.
//!
//! Every failure the client can observe is folded into [`ClientError`], whose
//! `Display` output is the human-readable message a view shows inline:
//!
//! | Failure | Variant | Message |
//! |---------|---------|---------|
//! | Network/transport failure | `Transport` | operation fallback |
//! | Non-2xx with `{ "error": "X" }` body | `Api` | `X` |
//! | Non-2xx with no parseable body | `Api` | operation fallback |
//! | 2xx with a body that does not match the schema | `Decode` | operation fallback |
//! | Corrupted local session data | handled by the session store (no error) |

use reqwest::StatusCode;
use serde::Deserialize;

use crate::auth::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a response.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected schema.
    #[error("{message}")]
    Decode { message: String, detail: String },

    /// Local session storage could not be written.
    #[error("Session storage failed: {0}")]
    Storage(#[from] StorageError),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The view that started the request was torn down.
    #[error("Request cancelled")]
    Cancelled,
}

/// Error body shapes produced by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl ClientError {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Build the error for a non-2xx response from its raw body.
    ///
    /// A string `error` field wins, then a string `message` field, then the
    /// caller's fallback.
    pub fn from_response_body(status: StatusCode, body: &str, fallback: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| fallback.to_string());
        Self::api(status, message)
    }

    /// HTTP status when the backend answered, `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the credentials of the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let non_empty = |v: Option<serde_json::Value>| {
        v.and_then(|v| v.as_str().map(str::trim).map(str::to_string))
            .filter(|s| !s.is_empty())
    };
    non_empty(parsed.error).or_else(|| non_empty(parsed.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_becomes_message() {
        let err = ClientError::from_response_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":"Insufficient balance"}"#,
            "Withdrawal request failed",
        );
        assert_eq!(err.to_string(), "Insufficient balance");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn message_field_is_second_choice() {
        let err = ClientError::from_response_body(
            StatusCode::NOT_FOUND,
            r#"{"message":"Plan not found"}"#,
            "Investment failed",
        );
        assert_eq!(err.to_string(), "Plan not found");
    }

    #[test]
    fn unparseable_body_uses_fallback() {
        let err = ClientError::from_response_body(
            StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>",
            "Failed to fetch wallet",
        );
        assert_eq!(err.to_string(), "Failed to fetch wallet");
    }

    #[test]
    fn non_string_error_field_uses_fallback() {
        let err = ClientError::from_response_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"code":42}}"#,
            "KYC submission failed",
        );
        assert_eq!(err.to_string(), "KYC submission failed");
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ClientError::api(StatusCode::UNAUTHORIZED, "x").is_unauthorized());
        assert!(ClientError::api(StatusCode::FORBIDDEN, "x").is_unauthorized());
        assert!(!ClientError::api(StatusCode::INTERNAL_SERVER_ERROR, "x").is_unauthorized());
        assert!(!ClientError::Cancelled.is_unauthorized());
    }
}
