//! API client error types.

use thiserror::Error;

/// Errors produced by [`crate::ApiClient`] calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `detail` carries the backend's human-readable
    /// message when the body was a `{"detail": "..."}` object.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no error detail"))]
    Http { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body did not parse as the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an error from a non-2xx status and its raw body.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|detail| detail.as_str().map(str::to_owned))
            });
        ApiError::Http { status, detail }
    }

    /// The backend's error message, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the backend detail when present, otherwise
    /// the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_owned)
            .unwrap_or_else(|| fallback.to_owned())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_body_extracts_detail() {
        let err = ApiError::from_status_body(500, r#"{"detail": "server error"}"#);
        assert_eq!(err.detail(), Some("server error"));
        assert_eq!(err.user_message("fallback"), "server error");
    }

    #[test]
    fn test_from_status_body_non_json_body() {
        let err = ApiError::from_status_body(502, "Bad Gateway");
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to load reviews"), "Failed to load reviews");
    }

    #[test]
    fn test_from_status_body_non_string_detail() {
        // FastAPI validation errors carry a list under "detail".
        let err = ApiError::from_status_body(422, r#"{"detail": [{"msg": "bad"}]}"#);
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_from_status_body_missing_detail_key() {
        let err = ApiError::from_status_body(404, r#"{"message": "nope"}"#);
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_transport_errors_use_fallback_message() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(
            err.user_message("Failed to submit review. Please try again."),
            "Failed to submit review. Please try again."
        );
    }

    #[test]
    fn test_http_error_display() {
        let err = ApiError::from_status_body(500, r#"{"detail": "server error"}"#);
        assert_eq!(err.to_string(), "HTTP 500: server error");
    }
}
