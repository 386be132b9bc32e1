//! Session store.
//!
//! The login token is a JWT whose middle segment carries the identity claims.
//! The client decodes that segment for routing and greeting only; it never
//! verifies the signature, so nothing here is an authorization check.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use gloo_storage::{LocalStorage, Storage};
use serde_json::{Map, Value};
use shared::models::{LoginRequest, RegisterRequest, Session, UserRole};

use crate::api::TicketGateway;
use crate::error::AppError;

/// JWT segments are base64url without padding, but some issuers pad.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const USER_ID_KEY: &str = "userId";
const USER_NAME_KEY: &str = "userName";
const USER_EMAIL_KEY: &str = "userEmail";

/// Durable storage for the signed-in session.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

/// [`SessionStorage`] backed by the browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<Session> {
        let token = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
        let read = |key: &str| LocalStorage::get::<String>(key).unwrap_or_default();
        Some(Session {
            token,
            role: read(ROLE_KEY),
            user_id: read(USER_ID_KEY),
            user_name: read(USER_NAME_KEY),
            user_email: read(USER_EMAIL_KEY),
        })
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        LocalStorage::set(TOKEN_KEY, session.token.as_str())?;
        LocalStorage::set(ROLE_KEY, session.role.as_str())?;
        LocalStorage::set(USER_ID_KEY, session.user_id.as_str())?;
        LocalStorage::set(USER_NAME_KEY, session.user_name.as_str())?;
        LocalStorage::set(USER_EMAIL_KEY, session.user_email.as_str())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let storage = LocalStorage::raw();
        for key in [TOKEN_KEY, ROLE_KEY, USER_ID_KEY, USER_NAME_KEY, USER_EMAIL_KEY] {
            storage
                .remove_item(key)
                .map_err(|err| AppError::Storage(format!("failed to remove {key}: {err:?}")))?;
        }
        Ok(())
    }
}

/// Decode the claims segment of a token into a [`Session`].
///
/// # Errors
/// [`AppError::InvalidToken`] when the token has no decodable JSON payload,
/// [`AppError::InvalidTokenClaims`] when the role or subject is missing.
pub fn decode_token(raw: &str) -> Result<Session, AppError> {
    let token = raw.trim();
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AppError::InvalidToken("token has no claims segment".to_string()))?;

    // Accept the standard alphabet too; `atob`-style encoders emit it.
    let payload: String = payload
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = TOKEN_ENGINE
        .decode(payload)
        .map_err(|err| AppError::InvalidToken(format!("claims segment is not base64: {err}")))?;
    let claims: Map<String, Value> = serde_json::from_slice(&bytes)
        .map_err(|err| AppError::InvalidToken(format!("claims segment is not a JSON object: {err}")))?;

    Ok(Session::from_claims(token, &claims)?)
}

/// Holds the current session and keeps storage in step with it.
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Rebuild the session persisted by a previous visit.
    ///
    /// The stored token is decoded again rather than trusting the cached
    /// fields; a token that no longer decodes is wiped.
    pub fn restore(storage: S) -> Self {
        let session = storage.load().and_then(|stored| match decode_token(&stored.token) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("discarding stored session: {err}");
                if let Err(err) = storage.clear() {
                    log::error!("{err}");
                }
                None
            }
        });
        Self { storage, session }
    }

    /// Decode `raw_token`, persist it and make it the current session.
    ///
    /// Nothing is persisted when decoding fails.
    pub fn decode_and_set_session(&mut self, raw_token: &str) -> Result<Session, AppError> {
        let session = decode_token(raw_token)?;
        self.storage.save(&session)?;
        log::info!("signed in as user {} ({})", session.user_id, session.role);
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The routable role of the current session.
    pub fn role(&self) -> Option<UserRole> {
        self.session.as_ref().and_then(Session::user_role)
    }

    /// Forget the session (logout).
    ///
    /// The in-memory session is dropped even when storage refuses the wipe.
    pub fn clear(&mut self) -> Result<(), AppError> {
        if self.session.take().is_some() {
            log::info!("signed out");
        }
        self.storage.clear()
    }

    pub fn into_session(self) -> Option<Session> {
        self.session
    }
}

/// Log in with credentials and establish the session from the returned token.
pub async fn sign_in<G, S>(
    gateway: &G,
    store: &mut SessionStore<S>,
    credentials: &LoginRequest,
) -> Result<Session, AppError>
where
    G: TicketGateway + ?Sized,
    S: SessionStorage,
{
    let response = gateway.login(credentials).await?;
    let token = response
        .bearer_token()
        .ok_or_else(|| AppError::InvalidToken("login response carried no token".to_string()))?;
    store.decode_and_set_session(token)
}

/// Register an account. When the server signs the new user in straight away
/// the session is established and returned.
pub async fn register_account<G, S>(
    gateway: &G,
    store: &mut SessionStore<S>,
    request: &RegisterRequest,
) -> Result<Option<Session>, AppError>
where
    G: TicketGateway + ?Sized,
    S: SessionStorage,
{
    let response = gateway.register(request).await?;
    match response.bearer_token() {
        Some(token) => store.decode_and_set_session(token).map(Some),
        None => Ok(None),
    }
}
