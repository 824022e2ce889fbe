//! Error types for the Zendesk client.
//!
//! This module defines `ZendeskError`, the unified error type returned by
//! every accessor. Nothing in this crate retries: the first transport,
//! status or decode failure is handed straight back to the caller.
//!
//! # Security
//!
//! Error messages built from response bodies are sanitized so the API
//! token never ends up in logs. Use `sanitize_message()` when constructing
//! error messages from external sources.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all Zendesk operations.
#[derive(Error, Debug)]
pub enum ZendeskError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Rate limited by the server (HTTP 429).
    #[error("rate limited by server - please wait before retrying")]
    RateLimited {
        /// Suggested retry delay, if provided by server.
        retry_after: Option<Duration>,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A custom field carried a value of a type Zendesk never sends.
    ///
    /// Returned by `CustomFieldValue::from_json`. When the field is decoded
    /// as part of a response, accessors report it as `Serialization` with
    /// this same message.
    #[error("{kind} is an invalid type for custom field value")]
    InvalidCustomFieldValue {
        /// JSON type of the offending value (e.g. `number`, `object`).
        kind: &'static str,
    },

    /// Requested resource was not found.
    #[error("resource not found: {resource}")]
    NotFound {
        /// The path of the resource that was not found.
        resource: String,
    },

    /// Authentication failed - likely an invalid API token.
    #[error("authentication failed - check ZENDESK_EMAIL and ZENDESK_API_TOKEN")]
    Authentication,

    /// Query options could not be turned into a request path.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

impl ZendeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ZendeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZendeskError::Config(message.into())
    }

    /// Creates a not found error for a resource path.
    pub fn not_found(resource: impl Into<String>) -> Self {
        ZendeskError::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        ZendeskError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates a custom field type error naming the JSON type of `value`.
    pub fn invalid_custom_field(value: &serde_json::Value) -> Self {
        ZendeskError::InvalidCustomFieldValue {
            kind: json_kind(value),
        }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        ZendeskError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns the delay suggested by a 429 response, if any.
    ///
    /// The client never waits on this itself; it is exposed for callers
    /// that implement their own pacing.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ZendeskError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API token.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_token` - The token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_token: &str) -> String {
        if api_token.is_empty() {
            return message.to_string();
        }
        message.replace(api_token, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_token: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_token)
    }
}

/// Names the JSON type of a value the way it shows up in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = ZendeskError::missing_env("ZENDESK_API_TOKEN");
        assert!(err.to_string().contains("ZENDESK_API_TOKEN"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_not_found_error() {
        let err = ZendeskError::not_found("/tickets/12345.json");
        assert_eq!(err.to_string(), "resource not found: /tickets/12345.json");
    }

    #[test]
    fn test_timeout_error() {
        let err = ZendeskError::timeout(Duration::from_secs(30), "GET /tickets.json");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn test_invalid_custom_field_names_type() {
        let err = ZendeskError::invalid_custom_field(&serde_json::json!(42));
        assert_eq!(
            err.to_string(),
            "number is an invalid type for custom field value"
        );

        let err = ZendeskError::invalid_custom_field(&serde_json::json!({"a": 1}));
        assert!(err.to_string().starts_with("object"));
    }

    #[test]
    fn test_retry_after_only_for_rate_limit() {
        let err = ZendeskError::RateLimited {
            retry_after: Some(Duration::from_secs(5)),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));
        assert_eq!(ZendeskError::Authentication.retry_after(), None);
    }

    #[test]
    fn test_sanitize_message_removes_api_token() {
        let token = "super_secret_token_12345";
        let message = format!("Error connecting with token {} to server", token);
        let sanitized = ZendeskError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_token() {
        let message = "Some error message";
        let sanitized = ZendeskError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_connection_test_error() {
        let err = ZendeskError::connection_test("Could not reach server");
        let msg = err.to_string();
        assert!(msg.contains("connection test failed"));
        assert!(msg.contains("Could not reach server"));
    }
}
