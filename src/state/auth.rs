//! Session state: token, username, and the authenticated flag.
//!
//! INVARIANT
//! =========
//! `is_authenticated` is true exactly when a non-empty token exists both
//! in memory and in durable storage. Every transition below writes or
//! clears the two sides together; nothing else touches the session keys.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::TokenPair;
use crate::storage::{self, SessionStorage};

/// The current session. One instance for the whole process, created empty
/// at startup and provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
    pub refresh_token: String,
    pub username: String,
    pub is_authenticated: bool,
}

impl AuthState {
    /// Restore a previously persisted session. Anonymous when no token
    /// (or an empty one) is stored.
    pub fn restore(storage: &impl SessionStorage) -> Self {
        if !storage::has_token(storage) {
            return Self::default();
        }
        Self {
            token: storage.get(storage::TOKEN_KEY).unwrap_or_default(),
            refresh_token: storage.get(storage::REFRESH_TOKEN_KEY).unwrap_or_default(),
            username: storage.get(storage::USERNAME_KEY).unwrap_or_default(),
            is_authenticated: true,
        }
    }

    /// Enter the authenticated state and mirror the session into storage.
    pub fn establish(&mut self, storage: &impl SessionStorage, tokens: &TokenPair, username: &str) {
        storage.set(storage::TOKEN_KEY, &tokens.token);
        storage.set(storage::REFRESH_TOKEN_KEY, &tokens.refresh_token);
        storage.set(storage::USERNAME_KEY, username);
        self.token = tokens.token.clone();
        self.refresh_token = tokens.refresh_token.clone();
        self.username = username.to_owned();
        self.is_authenticated = true;
    }

    /// Clear the session on both sides.
    pub fn clear(&mut self, storage: &impl SessionStorage) {
        storage::clear_session_keys(storage);
        *self = Self::default();
    }

    /// Authorization header value for the current session, if any.
    pub fn bearer(&self) -> Option<String> {
        if self.is_authenticated && !self.token.is_empty() {
            Some(crate::net::http::bearer_header(&self.token))
        } else {
            None
        }
    }
}

/// Restore the persisted session once at startup.
pub fn initialize(auth: RwSignal<AuthState>) {
    let restored = AuthState::restore(&storage::durable());
    auth.set(restored);
}

/// Log in and establish the session.
///
/// The persisted token doubles as the default outbound credential (the
/// HTTP adapter reads it per request), so establishing the session is all
/// that is needed for subsequent calls to be authenticated.
///
/// # Errors
///
/// On any failure the session is fully cleared before the error is
/// returned, so a half-written session can never survive a failed login.
pub async fn login(
    auth: RwSignal<AuthState>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    match crate::net::api::login(username, password).await {
        Ok(tokens) => {
            let durable = storage::durable();
            auth.update(|state| state.establish(&durable, &tokens, username));
            Ok(())
        }
        Err(err) => {
            logout(auth);
            Err(err)
        }
    }
}

/// Register a new account. The session is untouched either way; the user
/// still has to log in afterwards.
///
/// # Errors
///
/// Propagates API failures unchanged.
pub async fn register(name: &str, username: &str, password: &str) -> Result<(), ApiError> {
    crate::net::api::register(name, username, password).await
}

/// Clear the session and remove the durable keys.
pub fn logout(auth: RwSignal<AuthState>) {
    let durable = storage::durable();
    auth.update(|state| state.clear(&durable));
}

/// Top-level handler for a session-invalidating response: tear the
/// session down and hard-redirect to the login page. The transport layer
/// never does this itself; pages route `ApiError::invalidates_session()`
/// errors here.
pub fn expire_to_login(auth: RwSignal<AuthState>) {
    logout(auth);
    crate::util::browser::hard_redirect(crate::guard::LOGIN_PATH);
}
