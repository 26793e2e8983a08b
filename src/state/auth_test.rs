use super::*;

fn committed() -> AuthState {
    let mut state = AuthState::default();
    state.commit_login("u1".to_owned(), Some("s1".to_owned()), "alice".to_owned());
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.user_id.is_none());
    assert!(state.session.is_none());
}

#[test]
fn default_state_not_pending_no_error() {
    let state = AuthState::default();
    assert!(!state.pending);
    assert!(state.error.is_none());
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn begin_login_sets_pending_and_drops_stale_error() {
    let mut state = AuthState::default();
    state.error = Some("old failure".to_owned());

    state.begin_login();

    assert!(state.pending);
    assert!(state.error.is_none());
}

#[test]
fn commit_login_sets_identity_and_clears_pending() {
    let mut state = AuthState::default();
    state.begin_login();

    state.commit_login("u1".to_owned(), Some("s1".to_owned()), "alice".to_owned());

    assert!(state.is_authenticated());
    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert_eq!(state.session.as_deref(), Some("s1"));
    assert_eq!(state.username.as_deref(), Some("alice"));
    assert!(!state.pending);
    assert!(state.error.is_none());
}

#[test]
fn commit_login_without_session_token() {
    let mut state = AuthState::default();
    state.commit_login("u1".to_owned(), None, "alice".to_owned());

    assert!(state.is_authenticated());
    assert!(state.session.is_none());
}

#[test]
fn fail_login_records_error_and_clears_pending() {
    let mut state = AuthState::default();
    state.begin_login();

    state.fail_login("invalid credentials".to_owned());

    assert!(!state.pending);
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
    assert!(!state.is_authenticated());
}

#[test]
fn fail_login_preserves_committed_identity() {
    let mut state = committed();
    state.begin_login();

    state.fail_login("invalid credentials".to_owned());

    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert_eq!(state.session.as_deref(), Some("s1"));
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
}

#[test]
fn pending_is_false_after_any_resolution() {
    let mut success = AuthState::default();
    success.begin_login();
    success.commit_login("u1".to_owned(), None, "alice".to_owned());
    assert!(!success.pending);

    let mut failure = AuthState::default();
    failure.begin_login();
    failure.fail_login("nope".to_owned());
    assert!(!failure.pending);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_drops_identity_session_and_error() {
    let mut state = committed();
    state.error = Some("stale".to_owned());

    state.clear();

    assert!(!state.is_authenticated());
    assert!(state.username.is_none());
    assert!(state.session.is_none());
    assert!(state.error.is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut once = committed();
    once.clear();

    let mut twice = committed();
    twice.clear();
    twice.clear();

    assert_eq!(once, twice);
    assert_eq!(once, AuthState::default());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn adopt_sets_identity_from_persisted_pair() {
    let mut state = AuthState::default();
    state.adopt(PersistedSession {
        user_id: "u1".to_owned(),
        session: Some("s1".to_owned()),
    });

    assert!(state.is_authenticated());
    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert_eq!(state.session.as_deref(), Some("s1"));
    assert!(state.username.is_none());
}

#[test]
fn restore_without_storage_is_unauthenticated() {
    // Outside a browser, load() yields nothing.
    let state = restore();
    assert!(!state.is_authenticated());
    assert_eq!(state, AuthState::default());
}

#[test]
fn commit_then_adopt_round_trips_the_user_id() {
    let state = committed();
    let persisted = PersistedSession {
        user_id: state.user_id.clone().unwrap(),
        session: state.session.clone(),
    };

    let mut fresh = AuthState::default();
    fresh.adopt(persisted);

    assert_eq!(fresh.user_id, state.user_id);
    assert_eq!(fresh.session, state.session);
}

// =============================================================
// Login scenarios against stub responses
// =============================================================

#[test]
fn successful_login_response_commits_identity() {
    let resp: crate::net::types::LoginResponse =
        serde_json::from_value(serde_json::json!({ "user": "u1", "session": "s1" })).unwrap();
    let outcome = resp.into_result().unwrap();

    let mut state = AuthState::default();
    state.begin_login();
    state.commit_login(outcome.user, outcome.session, "alice".to_owned());

    assert!(state.is_authenticated());
    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert!(state.error.is_none());
    assert!(!state.pending);
}

#[test]
fn rejected_login_response_surfaces_the_server_message() {
    let resp: crate::net::types::LoginResponse =
        serde_json::from_value(serde_json::json!({ "error": "invalid credentials" })).unwrap();
    let err = resp.into_result().unwrap_err();

    let mut state = AuthState::default();
    state.begin_login();
    state.fail_login(err.to_string());

    assert!(!state.is_authenticated());
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
    assert!(!state.pending);
}

#[test]
fn auth_error_display_messages() {
    assert_eq!(
        AuthError::InvalidCredentials("bad password".to_owned()).to_string(),
        "bad password"
    );
    assert_eq!(AuthError::NetworkError.to_string(), "could not reach the server");
    assert_eq!(
        AuthError::MalformedResponse.to_string(),
        "unexpected response from the server"
    );
}
