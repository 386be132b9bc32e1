use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The nested `{ "token": "..." }` object the auth endpoints return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenEnvelope {
    pub token: String,
}

/// Response of `POST /auth/login`: `{ "token": { "token": "<jwt>" } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<TokenEnvelope>,
}

impl LoginResponse {
    /// The bearer token, if the server sent a non-empty one.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        bearer(self.token.as_ref())
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Response of `POST /auth/register`. Some deployments sign the new user in
/// straight away and include a token; others only acknowledge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<TokenEnvelope>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        bearer(self.token.as_ref())
    }
}

fn bearer(envelope: Option<&TokenEnvelope>) -> Option<&str> {
    envelope
        .map(|envelope| envelope.token.trim())
        .filter(|token| !token.is_empty())
}
