use super::*;

#[test]
fn validate_trims_both_fields() {
    let (email, password) = validate_login_input("  a@b.com  ", " hunter22 ").unwrap();
    assert_eq!(email, "a@b.com");
    assert_eq!(password, "hunter22");
}

#[test]
fn validate_rejects_missing_fields() {
    assert!(validate_login_input("", "pw").is_err());
    assert!(validate_login_input("a@b.com", "").is_err());
    assert!(validate_login_input("   ", "   ").is_err());
}

#[test]
fn expiry_notice_only_for_the_expired_flag() {
    assert_eq!(
        expiry_notice(Some("expired")),
        Some("Your session has expired. Please sign in again.")
    );
    assert_eq!(expiry_notice(Some("logout")), None);
    assert_eq!(expiry_notice(None), None);
}
