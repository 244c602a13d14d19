use super::*;

// =============================================================
// Bearer attachment
// =============================================================

#[test]
fn bearer_for_usable_token() {
    assert_eq!(bearer_for(Some("at-1")).as_deref(), Some("Bearer at-1"));
}

#[test]
fn bearer_for_trims_before_attaching() {
    assert_eq!(bearer_for(Some("  at-1  ")).as_deref(), Some("Bearer at-1"));
}

#[test]
fn bearer_for_rejects_unusable_tokens() {
    assert_eq!(bearer_for(None), None);
    assert_eq!(bearer_for(Some("")), None);
    assert_eq!(bearer_for(Some("   ")), None);
    assert_eq!(bearer_for(Some("null")), None);
    assert_eq!(bearer_for(Some("NULL")), None);
    assert_eq!(bearer_for(Some("undefined")), None);
    assert_eq!(bearer_for(Some("Undefined")), None);
}

// =============================================================
// 401 redirect decision
// =============================================================

#[test]
fn expired_redirect_from_business_page() {
    assert_eq!(expired_redirect("/clubs"), Some(EXPIRED_REDIRECT));
    assert_eq!(expired_redirect("/"), Some(EXPIRED_REDIRECT));
}

#[test]
fn expired_redirect_suppressed_on_login() {
    assert_eq!(expired_redirect("/login"), None);
    assert_eq!(expired_redirect("/login?reason=expired"), None);
    assert_eq!(expired_redirect("/login/"), None);
}

#[test]
fn expired_redirect_not_fooled_by_login_prefix() {
    // A different route that merely starts with the same characters.
    assert_eq!(expired_redirect("/logins"), Some(EXPIRED_REDIRECT));
}
