//! Durable session persistence backed by `localStorage`.
//!
//! Two fixed keys hold the authenticated user id and the server session
//! token. Both are absent when logged out. Storage read/write failures
//! (quota, private mode, storage disabled) are swallowed — the app then
//! runs with an in-memory-only session for that page load. Requires a
//! browser environment; on the server every operation is a no-op.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

#[cfg(feature = "hydrate")]
const USER_KEY: &str = "focus_reader_user";
#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "focus_reader_session";

/// The session pair mirrored to durable storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistedSession {
    pub user_id: String,
    pub session: Option<String>,
}

impl PersistedSession {
    /// Validate raw stored values.
    ///
    /// Any non-empty string under the user key is accepted; everything else
    /// (absent, empty) is treated as no persisted session. The session token
    /// is optional and ignored when the user id is rejected.
    pub fn from_raw(user_id: Option<String>, session: Option<String>) -> Option<Self> {
        let user_id = user_id.filter(|u| !u.is_empty())?;
        Some(Self {
            user_id,
            session: session.filter(|s| !s.is_empty()),
        })
    }
}

/// Read the persisted session, if any.
pub fn load() -> Option<PersistedSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let user_id = storage.get_item(USER_KEY).ok().flatten();
        let session = storage.get_item(SESSION_KEY).ok().flatten();
        PersistedSession::from_raw(user_id, session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mirror a committed session to storage.
pub fn store(persisted: &PersistedSession) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(USER_KEY, &persisted.user_id);
            match &persisted.session {
                Some(session) => {
                    let _ = storage.set_item(SESSION_KEY, session);
                }
                None => {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = persisted;
    }
}

/// Remove any persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(USER_KEY);
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
