//! Identity claims carried by the login token.
//!
//! The auth service issues tokens with WS-Federation style claim URIs for the
//! role and display name. The client reads them for routing and greeting
//! only; authorization happens server side.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::UserRole;

/// Claim key holding the user's role.
pub const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
/// Claim key holding the user's display name.
pub const NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
/// Claim key holding the user id.
pub const SUBJECT_CLAIM: &str = "sub";
/// Claim key holding the user's email address.
pub const EMAIL_CLAIM: &str = "email";

/// Required claims that were absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("token has no role claim")]
    MissingRole,
    #[error("token has no subject claim")]
    MissingSubject,
}

/// The signed-in identity, as decoded from the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub role: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
}

impl Session {
    /// Build a session from a decoded claims object.
    ///
    /// # Errors
    /// Returns [`ClaimsError`] when the role or subject claim is missing or
    /// empty.
    pub fn from_claims(token: impl Into<String>, claims: &Map<String, Value>) -> Result<Self, ClaimsError> {
        let role = claim_text(claims, ROLE_CLAIM).ok_or(ClaimsError::MissingRole)?;
        let user_id = claim_text(claims, SUBJECT_CLAIM).ok_or(ClaimsError::MissingSubject)?;

        Ok(Self {
            token: token.into(),
            role,
            user_id,
            user_name: claim_text(claims, NAME_CLAIM).unwrap_or_default(),
            user_email: claim_text(claims, EMAIL_CLAIM).unwrap_or_default(),
        })
    }

    /// The role, if it is one the client can route.
    #[must_use]
    pub fn user_role(&self) -> Option<UserRole> {
        self.role.parse().ok()
    }

    /// The user id as the numeric key the ticket API expects.
    #[must_use]
    pub fn numeric_user_id(&self) -> Option<i64> {
        self.user_id.trim().parse().ok()
    }
}

/// Read a claim as text. Numbers are accepted because some issuers encode
/// `sub` as an integer.
fn claim_text(claims: &Map<String, Value>, key: &str) -> Option<String> {
    match claims.get(key)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn full_claims_build_a_session() {
        let session = Session::from_claims(
            "tok",
            &claims(json!({
                ROLE_CLAIM: "Admin",
                SUBJECT_CLAIM: "17",
                NAME_CLAIM: "Ada Lovelace",
                EMAIL_CLAIM: "ada@example.com"
            })),
        )
        .unwrap();

        assert_eq!(session.token, "tok");
        assert_eq!(session.user_role(), Some(UserRole::Admin));
        assert_eq!(session.numeric_user_id(), Some(17));
        assert_eq!(session.user_name, "Ada Lovelace");
        assert_eq!(session.user_email, "ada@example.com");
    }

    #[test]
    fn numeric_subject_is_accepted() {
        let session =
            Session::from_claims("tok", &claims(json!({ ROLE_CLAIM: "Client", "sub": 9 }))).unwrap();
        assert_eq!(session.user_id, "9");
        assert_eq!(session.user_name, "");
    }

    #[test]
    fn missing_role_is_rejected() {
        let result = Session::from_claims("tok", &claims(json!({ "sub": "1" })));
        assert_eq!(result, Err(ClaimsError::MissingRole));

        let blank = Session::from_claims("tok", &claims(json!({ ROLE_CLAIM: "", "sub": "1" })));
        assert_eq!(blank, Err(ClaimsError::MissingRole));
    }

    #[test]
    fn missing_subject_is_rejected() {
        let result = Session::from_claims("tok", &claims(json!({ ROLE_CLAIM: "Admin" })));
        assert_eq!(result, Err(ClaimsError::MissingSubject));
    }

    #[test]
    fn unknown_role_decodes_but_is_not_routable() {
        let session =
            Session::from_claims("tok", &claims(json!({ ROLE_CLAIM: "Auditor", "sub": "3" }))).unwrap();
        assert_eq!(session.user_role(), None);
    }
}
