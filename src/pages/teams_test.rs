use super::*;

#[test]
fn build_fills_the_required_fields() {
    let req = build_team_request(" U16 Falcons ", "club-1", " Casey Coach ").unwrap();
    assert_eq!(req.name, "U16 Falcons");
    assert_eq!(req.club_id, "club-1");
    assert_eq!(req.coach_name.as_deref(), Some("Casey Coach"));
    assert_eq!(req.home_ground, None);
}

#[test]
fn build_requires_name_and_club() {
    assert!(build_team_request("", "club-1", "").is_err());
    assert!(build_team_request("U16 Falcons", "  ", "").is_err());
}

#[test]
fn build_drops_a_blank_coach() {
    let req = build_team_request("U16 Falcons", "club-1", "   ").unwrap();
    assert_eq!(req.coach_name, None);
}
