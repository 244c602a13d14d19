use super::*;

#[test]
fn build_trims_and_keeps_the_city() {
    let req = build_club_request("  FC North  ", " Oslo ").unwrap();
    assert_eq!(req.name, "FC North");
    assert_eq!(req.city.as_deref(), Some("Oslo"));
}

#[test]
fn build_drops_a_blank_city() {
    let req = build_club_request("FC North", "   ").unwrap();
    assert_eq!(req.city, None);
}

#[test]
fn build_requires_a_name() {
    assert!(build_club_request("   ", "Oslo").is_err());
}
