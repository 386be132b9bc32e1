use serde::{Deserialize, Serialize};

/// Error body returned by the ticket API.
///
/// Hand-written endpoints answer `{ "error": "..." }`, model binding failures
/// come back as problem details with `title`, and a few legacy routes use
/// `message`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ErrorResponse {
    /// Parse an error body, returning `None` when it is not JSON.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The most specific non-empty message in the body.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        [&self.error, &self.message, &self.title]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins() {
        let body = r#"{"error":"Email already registered","title":"Bad Request"}"#;
        let response = ErrorResponse::from_body(body).unwrap();
        assert_eq!(response.summary(), Some("Email already registered"));
    }

    #[test]
    fn falls_back_to_problem_title() {
        let body = r#"{"type":"https://tools.ietf.org/html/rfc9110#section-15.5.1","title":"One or more validation errors occurred.","status":400}"#;
        let response = ErrorResponse::from_body(body).unwrap();
        assert_eq!(response.summary(), Some("One or more validation errors occurred."));
    }

    #[test]
    fn blank_fields_are_skipped() {
        let response = ErrorResponse {
            error: Some("  ".to_string()),
            message: Some("Ticket not found".to_string()),
            title: None,
        };
        assert_eq!(response.summary(), Some("Ticket not found"));
        assert_eq!(ErrorResponse::default().summary(), None);
    }

    #[test]
    fn non_json_body_is_ignored() {
        assert!(ErrorResponse::from_body("<html>502</html>").is_none());
    }
}
