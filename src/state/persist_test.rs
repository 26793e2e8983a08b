use super::*;

// =============================================================
// Raw-value validation
// =============================================================

#[test]
fn from_raw_accepts_non_empty_user_id() {
    let persisted = PersistedSession::from_raw(Some("u1".to_owned()), None).unwrap();
    assert_eq!(persisted.user_id, "u1");
    assert!(persisted.session.is_none());
}

#[test]
fn from_raw_keeps_session_token() {
    let persisted =
        PersistedSession::from_raw(Some("u1".to_owned()), Some("s1".to_owned())).unwrap();
    assert_eq!(persisted.session.as_deref(), Some("s1"));
}

#[test]
fn from_raw_rejects_absent_user_id() {
    assert!(PersistedSession::from_raw(None, Some("s1".to_owned())).is_none());
}

#[test]
fn from_raw_rejects_empty_user_id() {
    assert!(PersistedSession::from_raw(Some(String::new()), None).is_none());
}

#[test]
fn from_raw_drops_empty_session_token() {
    let persisted =
        PersistedSession::from_raw(Some("u1".to_owned()), Some(String::new())).unwrap();
    assert!(persisted.session.is_none());
}

// =============================================================
// Non-browser environment
// =============================================================

#[test]
fn load_outside_browser_is_none() {
    assert!(load().is_none());
}

#[test]
fn store_and_clear_outside_browser_are_no_ops() {
    store(&PersistedSession {
        user_id: "u1".to_owned(),
        session: None,
    });
    clear();
    assert!(load().is_none());
}
