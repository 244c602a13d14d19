use super::*;

#[test]
fn roles_join_with_commas() {
    let roles = vec!["ADMIN".to_owned(), "COACH".to_owned()];
    assert_eq!(format_roles(&roles), "ADMIN, COACH");
}

#[test]
fn a_single_role_has_no_separator() {
    assert_eq!(format_roles(&["VIEWER".to_owned()]), "VIEWER");
}

#[test]
fn no_roles_is_an_empty_cell() {
    assert_eq!(format_roles(&[]), "");
}
