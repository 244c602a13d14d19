use super::*;

#[test]
fn fallback_message_only_for_auth_statuses() {
    assert_eq!(fallback_message(401), Some("Unauthenticated"));
    assert_eq!(fallback_message(403), Some("Forbidden"));
    assert_eq!(fallback_message(404), None);
    assert_eq!(fallback_message(500), None);
}

#[test]
fn resolve_message_prefers_server_body() {
    assert_eq!(
        resolve_message(401, Some("Token revoked".to_owned())),
        "Token revoked"
    );
}

#[test]
fn resolve_message_falls_back_on_blank_body() {
    assert_eq!(resolve_message(401, Some("   ".to_owned())), "Unauthenticated");
    assert_eq!(resolve_message(403, None), "Forbidden");
}

#[test]
fn resolve_message_generic_for_other_statuses() {
    assert_eq!(resolve_message(500, None), "request failed: 500");
}

#[test]
fn display_includes_status_when_present() {
    let err = ApiError::status(403, "Forbidden");
    assert_eq!(err.to_string(), "Forbidden (403)");
    let err = ApiError::transport("connection refused");
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn error_body_decodes_with_or_without_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("nope"));
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
