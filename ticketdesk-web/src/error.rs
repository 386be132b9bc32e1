//! Error taxonomy for the web client.
//!
//! Every fallible operation in the gateway, session store and view-models
//! returns [`AppError`]. Pages turn it into a toast or an inline form error
//! with [`AppError::user_message`]; nothing is allowed to panic the renderer.

use shared::models::{ClaimsError, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The token could not be split or decoded.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The token decoded but lacks the role or subject claim.
    #[error("invalid token claims: {0}")]
    InvalidTokenClaims(#[from] ClaimsError),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// Local form validation failed; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// Browser storage rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Status code for HTTP failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a toast or form error.
    ///
    /// HTTP failures prefer the message the server put in its error body.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status, body } => ErrorResponse::from_body(body)
                .as_ref()
                .and_then(ErrorResponse::summary)
                .map_or_else(|| format!("Request failed ({status})"), str::to_string),
            Self::Network(_) => "Unable to connect to server".to_string(),
            Self::Parse(_) => "The server sent an unexpected response".to_string(),
            Self::InvalidToken(_) => "Invalid token from server".to_string(),
            Self::InvalidTokenClaims(_) => "Invalid token claims".to_string(),
            Self::Validation(message) => message.clone(),
            Self::Storage(_) => "Unable to save your session in this browser".to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<gloo_storage::errors::StorageError> for AppError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_message_prefers_server_error_body() {
        let err = AppError::Http {
            status: 400,
            body: r#"{"error":"Title is required"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "Title is required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn http_message_falls_back_to_status() {
        let err = AppError::Http {
            status: 503,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(err.user_message(), "Request failed (503)");
    }

    #[test]
    fn claims_errors_convert() {
        let err: AppError = ClaimsError::MissingRole.into();
        assert_eq!(err, AppError::InvalidTokenClaims(ClaimsError::MissingRole));
        assert_eq!(err.user_message(), "Invalid token claims");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = AppError::validation("title required");
        assert_eq!(err.to_string(), "title required");
        assert_eq!(err.user_message(), "title required");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: AppError = serde_json::from_str::<Vec<i64>>("{").unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
