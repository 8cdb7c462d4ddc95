//! API error type and its JSON rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was missing or blank.
    #[error("{0}")]
    Validation(&'static str),
    /// The provider could not be reached; the cause has already been logged.
    #[error("{0}")]
    UpstreamUnavailable(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    /// Rendered as `{error: <message>}`.
    #[error("{0}")]
    Internal(String),
    /// Rendered as `{error: "An unexpected error occurred", details: <message>}`.
    #[error("An unexpected error occurred: {0}")]
    InternalWithDetails(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamUnavailable(_)
            | ApiError::Internal(_)
            | ApiError::InternalWithDetails(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Request failed with {}: {}", status, self);
        }

        let body = match self {
            ApiError::Validation(message)
            | ApiError::UpstreamUnavailable(message)
            | ApiError::NotFound(message) => json!({ "error": message }),
            ApiError::Internal(message) => json!({ "error": message }),
            ApiError::InternalWithDetails(details) => json!({
                "error": UNEXPECTED_ERROR,
                "details": details,
            }),
        };
        (status, Json(body)).into_response()
    }
}

/// First value given for `key`; later repeats are ignored.
pub fn first_param(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Trimmed query parameter, `None` when absent or blank.
pub fn required_param(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses() {
        assert_eq!(ApiError::Validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UpstreamUnavailable("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InternalWithDetails("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn blank_params_are_missing() {
        assert_eq!(required_param(None), None);
        assert_eq!(required_param(Some("  ".into())), None);
        assert_eq!(required_param(Some(" DEL ".into())), Some("DEL".to_string()));
    }

    #[test]
    fn first_param_ignores_repeats() {
        let pairs = vec![
            ("departure".to_string(), "DEL".to_string()),
            ("arrival".to_string(), "BOM".to_string()),
            ("departure".to_string(), "GOI".to_string()),
        ];
        assert_eq!(first_param(&pairs, "departure"), Some("DEL".to_string()));
        assert_eq!(first_param(&pairs, "arrival"), Some("BOM".to_string()));
        assert_eq!(first_param(&pairs, "iata"), None);
    }
}
