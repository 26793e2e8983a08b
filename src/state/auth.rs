//! Authentication session store.
//!
//! `AuthState` is the single source of truth for "who is logged in". The
//! transition methods are pure and synchronous; the async actions below them
//! ([`login`], [`logout`]) are the only places that talk to the network, and
//! [`restore`] is the only place that reads persisted state. Local storage is
//! a passive mirror kept in sync on every committed mutation — nothing else
//! writes to it.
//!
//! ERROR HANDLING
//! ==============
//! Network failures land in `AuthState::error` for the views to render and
//! are also returned as [`AuthError`] to the awaiting caller. Storage
//! failures never surface at all; the session simply stops being durable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use thiserror::Error;

use crate::state::persist::{self, PersistedSession};

/// Why a login attempt failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The server rejected the credentials; the message is user-facing.
    #[error("{0}")]
    InvalidCredentials(String),
    /// Transport-level failure; retryable by resubmitting the form.
    #[error("could not reach the server")]
    NetworkError,
    /// The server answered with neither an identity nor an error field.
    #[error("unexpected response from the server")]
    MalformedResponse,
}

/// Authentication state tracking the current session.
///
/// `user_id` is set iff the most recent login succeeded and has not been
/// logged out since; `session` (the server-side token) shares its lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub session: Option<String>,
    pub pending: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// True iff a session is currently committed.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Mark a login attempt as in flight and drop any stale error.
    pub fn begin_login(&mut self) {
        self.pending = true;
        self.error = None;
    }

    /// Commit a successful login.
    pub fn commit_login(&mut self, user_id: String, session: Option<String>, username: String) {
        self.user_id = Some(user_id);
        self.session = session;
        self.username = Some(username);
        self.pending = false;
        self.error = None;
    }

    /// Record a failed login attempt.
    ///
    /// A previously committed identity is preserved: failing to
    /// re-authenticate as someone else does not log the current user out.
    pub fn fail_login(&mut self, message: String) {
        self.error = Some(message);
        self.pending = false;
    }

    /// Logout transition. Idempotent; safe to call with no session committed.
    pub fn clear(&mut self) {
        self.user_id = None;
        self.username = None;
        self.session = None;
        self.error = None;
    }

    /// Adopt a persisted session as the current identity.
    ///
    /// The stored session is trusted without re-validating against the
    /// server; a later server rejection is handled like any other failure.
    pub fn adopt(&mut self, persisted: PersistedSession) {
        self.user_id = Some(persisted.user_id);
        self.session = persisted.session;
    }
}

/// Build the startup `AuthState` from durable storage.
///
/// Synchronous; must run before the first navigation-guard evaluation so a
/// valid persisted session is never transiently treated as logged-out.
/// Malformed or absent storage leaves the state unauthenticated and is not
/// written back.
pub fn restore() -> AuthState {
    let mut state = AuthState::default();
    if let Some(persisted) = persist::load() {
        state.adopt(persisted);
    }
    state
}

/// Log in against `POST /api/auth/login` and commit the result.
///
/// On success the identity is persisted to local storage before this
/// returns. On failure the error lands in `AuthState::error` and any
/// previously committed identity is left untouched. `pending` is cleared on
/// every path. Overlapping calls are not serialized; the last to resolve
/// wins `pending`/`error`.
///
/// # Errors
///
/// Returns the [`AuthError`] that was recorded in state, so callers can
/// branch on the outcome without re-reading the signal.
pub async fn login(
    auth: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), AuthError> {
    auth.update(AuthState::begin_login);

    let outcome = crate::net::api::auth_login(&username, &password).await;
    match outcome {
        Ok(identity) => {
            auth.update(|a| a.commit_login(identity.user.clone(), identity.session.clone(), username));
            persist::store(&PersistedSession {
                user_id: identity.user,
                session: identity.session,
            });
            Ok(())
        }
        Err(err) => {
            auth.update(|a| a.fail_login(err.to_string()));
            Err(err)
        }
    }
}

/// Log out: best-effort server notification, then unconditional local clear.
///
/// The `POST /api/auth/logout` notification is only sent when a session
/// token exists, and its failure is swallowed — logout always succeeds
/// locally. Idempotent.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Some(session) = auth.get_untracked().session {
        crate::net::api::auth_logout(&session).await;
    }
    auth.update(AuthState::clear);
    persist::clear();
}
