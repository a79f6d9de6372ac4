//! Error taxonomy for the storefront API client.
//!
//! The HTTP core is the only place that classifies status codes. Endpoints
//! may re-map the surfaced message for specific statuses (401 on login, 422
//! on register) but must leave `field_errors` untouched so forms can render
//! per-field feedback.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Per-field validation messages, keyed by form-field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; the request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or the per-status fallback.
        message: String,
        /// Validation messages per form field, when the body carried any.
        field_errors: Option<FieldErrors>,
    },

    /// A 2xx response whose body was not valid JSON for the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The user-facing banner message for this error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Network(e) => e.to_string(),
            Self::Http { message, .. } => message.clone(),
            Self::Parse(message) => message.clone(),
        }
    }

    /// HTTP status code, when the server produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }
}

/// Error body shape the remote service uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

/// Static fallback message for a status code, used when the error body
/// carries no message of its own.
#[must_use]
pub(crate) const fn fallback_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Invalid email or password",
        403 => "Access forbidden",
        404 => "Resource not found",
        422 => "Please check the form for errors.",
        500 => "Server error",
        503 => "Service unavailable",
        _ => "Unexpected error",
    }
}

/// Build the typed error for a non-2xx response.
///
/// Attempts to parse a `{message?, errors?}` JSON body; a missing or
/// unparseable body falls back to the static per-status message.
pub(crate) fn classify_status(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();

    let (message, field_errors) = match parsed {
        Some(body) => (
            body.message.filter(|m| !m.is_empty()),
            body.errors.filter(|e| !e.is_empty()),
        ),
        None => (None, None),
    };

    ApiError::Http {
        status,
        message: message.unwrap_or_else(|| fallback_message(status).to_string()),
        field_errors,
    }
}

/// Whether the surfaced message is the per-status fallback rather than a
/// message the server supplied.
pub(crate) fn is_fallback_message(status: u16, message: &str) -> bool {
    message == fallback_message(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uses_server_message() {
        let err = classify_status(404, r#"{"message": "No such product"}"#);
        assert_eq!(err.to_string(), "HTTP 404: No such product");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_classify_preserves_field_errors() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email field is required."],
                "password": ["The password must be at least 8 characters.", "mismatch"]
            }
        }"#;

        let err = classify_status(422, body);
        let ApiError::Http { field_errors, .. } = err else {
            panic!("expected Http error");
        };
        let field_errors = field_errors.expect("field errors");
        assert_eq!(
            field_errors.get("email").map(Vec::len),
            Some(1)
        );
        assert_eq!(
            field_errors.get("password").map(Vec::len),
            Some(2)
        );
    }

    #[test]
    fn test_classify_falls_back_without_body_message() {
        let err = classify_status(422, r#"{"errors": {"name": ["required"]}}"#);
        let ApiError::Http {
            message,
            field_errors,
            ..
        } = err
        else {
            panic!("expected Http error");
        };
        assert_eq!(message, "Please check the form for errors.");
        assert!(field_errors.is_some());
    }

    #[test]
    fn test_classify_falls_back_on_unparseable_body() {
        let err = classify_status(500, "<html>Internal Server Error</html>");
        assert_eq!(err.message(), "Server error");

        let err = classify_status(503, "");
        assert_eq!(err.message(), "Service unavailable");
    }

    #[test]
    fn test_classify_empty_message_treated_as_absent() {
        let err = classify_status(401, r#"{"message": ""}"#);
        assert_eq!(err.message(), "Invalid email or password");
    }

    #[test]
    fn test_fallback_message_table() {
        assert_eq!(fallback_message(400), "Bad request");
        assert_eq!(fallback_message(403), "Access forbidden");
        assert_eq!(fallback_message(404), "Resource not found");
        assert_eq!(fallback_message(500), "Server error");
        assert_eq!(fallback_message(418), "Unexpected error");
    }

    #[test]
    fn test_is_fallback_message() {
        assert!(is_fallback_message(422, "Please check the form for errors."));
        assert!(!is_fallback_message(422, "The given data was invalid."));
    }
}
