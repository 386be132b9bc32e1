use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::lenient::null_as_default;

/// Roles the web client knows how to route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Client,
    Support,
}

impl UserRole {
    /// The spelling used in token claims and the `role` storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Client => "Client",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role claims are matched exactly; `admin` is not a role the client routes.
impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Self::Admin),
            "Client" => Ok(Self::Client),
            "Support" => Ok(Self::Support),
            _ => Err("unknown user role"),
        }
    }
}

/// A user record from `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

impl User {
    /// Whether the user can be picked as a ticket assignee.
    #[must_use]
    pub fn is_support(&self) -> bool {
        self.role.trim().eq_ignore_ascii_case("support")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("Admin", UserRole::Admin),
            ("Client", UserRole::Client),
            ("Support", UserRole::Support),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_parsing_is_exact() {
        assert!(UserRole::from_str("admin").is_err());
        assert!(UserRole::from_str("CLIENT").is_err());
        assert!(UserRole::from_str(" Support ").is_err());
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("guest").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn support_detection_is_case_insensitive() {
        let user: User = serde_json::from_value(json!({
            "id": 5,
            "name": "Walter Skinner",
            "role": "support"
        }))
        .unwrap();
        assert!(user.is_support());

        let admin = User {
            role: "Admin".to_string(),
            ..user.clone()
        };
        assert!(!admin.is_support());

        let shouting = User {
            role: "SUPPORT".to_string(),
            ..user
        };
        assert!(shouting.is_support());
    }
}
