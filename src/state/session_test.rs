use super::*;

fn profile() -> Profile {
    Profile {
        id: "u1".to_owned(),
        email: "coach@club.test".to_owned(),
        full_name: "Casey Coach".to_owned(),
    }
}

// =============================================================
// Phase projection
// =============================================================

#[test]
fn anonymous_has_no_token_and_no_phase_surprises() {
    let state = SessionState::anonymous();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.is_authenticated());
    assert_eq!(state.access_token(), None);
    assert!(state.roles().is_empty());
    assert_eq!(state.user(), None);
}

#[test]
fn pending_token_is_syncing_not_authenticated() {
    let state = SessionState::pending("at-1".to_owned(), None, vec![Role::Coach]);
    assert_eq!(state.phase(), SessionPhase::Syncing);
    assert!(!state.is_authenticated());
    assert_eq!(state.access_token(), Some("at-1"));
}

#[test]
fn token_plus_user_is_authenticated() {
    let state = SessionState::authenticated(
        "at-1".to_owned(),
        Some("rt-1".to_owned()),
        vec![Role::Coach],
        profile(),
    );
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(state.is_authenticated());
    assert_eq!(state.display_name(), Some("Casey Coach"));
}

// =============================================================
// Projection from the durable store
// =============================================================

#[test]
fn from_store_with_no_token_is_anonymous() {
    let state = SessionState::from_store(&StoredSession::default());
    assert_eq!(state, SessionState::anonymous());
}

#[test]
fn from_store_rejects_sentinel_tokens() {
    let stored = StoredSession {
        access_token: Some("undefined".to_owned()),
        refresh_token: Some("rt-1".to_owned()),
        roles: vec![Role::Admin],
        user: Some(profile()),
    };
    // An unusable token collapses the whole snapshot, cached user included.
    assert_eq!(SessionState::from_store(&stored), SessionState::anonymous());
}

#[test]
fn from_store_token_without_user_enters_syncing() {
    let stored = StoredSession {
        access_token: Some("at-1".to_owned()),
        refresh_token: None,
        roles: vec![Role::Manager],
        user: None,
    };
    let state = SessionState::from_store(&stored);
    assert_eq!(state.phase(), SessionPhase::Syncing);
    assert!(state.has_role(Role::Manager));
}

#[test]
fn from_store_token_with_cached_user_is_authenticated() {
    let stored = StoredSession {
        access_token: Some("  at-1  ".to_owned()),
        refresh_token: Some("null".to_owned()),
        roles: vec![Role::Coach],
        user: Some(profile()),
    };
    let state = SessionState::from_store(&stored);
    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.access_token(), Some("at-1"));
    // The sentinel refresh token is dropped rather than carried along.
    assert_eq!(
        state,
        SessionState::authenticated("at-1".to_owned(), None, vec![Role::Coach], profile())
    );
}

// =============================================================
// Role lookup
// =============================================================

#[test]
fn has_role_is_exact_membership() {
    let state = SessionState::pending("at-1".to_owned(), None, vec![Role::Admin, Role::Coach]);
    assert!(state.has_role(Role::Admin));
    assert!(state.has_role(Role::Coach));
    assert!(!state.has_role(Role::Manager));
}

// =============================================================
// Stale-write guard
// =============================================================

#[test]
fn fetch_is_current_only_for_matching_tokens() {
    assert!(fetch_is_current("at-1", Some("at-1")));
    assert!(!fetch_is_current("at-1", Some("at-2")));
    assert!(!fetch_is_current("at-1", None));
}

#[test]
fn fetch_is_current_rejects_unusable_initiators() {
    // A cleared or sentinel token can never claim a fetch result.
    assert!(!fetch_is_current("", Some("")));
    assert!(!fetch_is_current("null", Some("null")));
}
