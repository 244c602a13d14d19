use super::*;

#[test]
fn validate_accepts_a_complete_form() {
    let (name, email, password) =
        validate_register_input("  Pat Player ", " pat@club.test ", "longenough").unwrap();
    assert_eq!(name, "Pat Player");
    assert_eq!(email, "pat@club.test");
    assert_eq!(password, "longenough");
}

#[test]
fn validate_requires_name_and_email() {
    assert!(validate_register_input("", "pat@club.test", "longenough").is_err());
    assert!(validate_register_input("Pat", "   ", "longenough").is_err());
}

#[test]
fn validate_enforces_the_password_floor() {
    assert!(validate_register_input("Pat", "pat@club.test", "short77").is_err());
    assert!(validate_register_input("Pat", "pat@club.test", "exactly8").is_ok());
}
