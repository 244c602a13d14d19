use super::*;

// =============================================================
// Token usability
// =============================================================

#[test]
fn usable_token_accepts_normal_tokens() {
    assert_eq!(usable_token(Some("at-1")), Some("at-1"));
    assert_eq!(usable_token(Some("  at-1\n")), Some("at-1"));
}

#[test]
fn usable_token_rejects_absent_and_blank() {
    assert_eq!(usable_token(None), None);
    assert_eq!(usable_token(Some("")), None);
    assert_eq!(usable_token(Some("   ")), None);
}

#[test]
fn usable_token_rejects_stringified_null_sentinels() {
    assert_eq!(usable_token(Some("null")), None);
    assert_eq!(usable_token(Some("undefined")), None);
    assert_eq!(usable_token(Some("NULL")), None);
    assert_eq!(usable_token(Some("  Undefined  ")), None);
}

#[test]
fn usable_token_keeps_tokens_containing_sentinel_text() {
    // Only exact sentinel values are rejected, not substrings.
    assert_eq!(usable_token(Some("null-like-token")), Some("null-like-token"));
}

// =============================================================
// Role cache codec
// =============================================================

#[test]
fn decode_roles_round_trips() {
    let roles = vec![Role::Admin, Role::Coach];
    let encoded = encode_roles(&roles);
    assert_eq!(decode_roles(Some(&encoded)), roles);
}

#[test]
fn decode_roles_absent_is_empty() {
    assert!(decode_roles(None).is_empty());
}

#[test]
fn decode_roles_corrupted_json_is_empty_not_error() {
    assert!(decode_roles(Some("not json at all")).is_empty());
    assert!(decode_roles(Some("{\"roles\":true}")).is_empty());
}

#[test]
fn decode_roles_drops_unknown_tags() {
    let decoded = decode_roles(Some(r#"["ADMIN","WIZARD"]"#));
    assert_eq!(decoded, vec![Role::Admin]);
}

#[test]
fn encode_roles_empty_set() {
    assert_eq!(encode_roles(&[]), "[]");
}

// =============================================================
// User cache codec
// =============================================================

#[test]
fn decode_user_round_trips() {
    let profile = Profile {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Alice Alson".to_owned(),
    };
    let blob = serde_json::to_string(&profile).unwrap();
    assert_eq!(decode_user(Some(&blob)), Some(profile));
}

#[test]
fn decode_user_corrupted_is_none() {
    assert_eq!(decode_user(Some("{broken")), None);
    assert_eq!(decode_user(None), None);
}

// =============================================================
// Store operations (native build has no browser storage; read/clear
// must still be total)
// =============================================================

#[test]
fn read_never_fails_without_a_browser() {
    assert_eq!(read(), StoredSession::default());
}

#[test]
fn clear_is_idempotent() {
    clear();
    clear();
    assert_eq!(read(), StoredSession::default());
}
