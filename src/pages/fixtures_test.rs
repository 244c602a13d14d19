use super::*;

fn fixture(home: Option<i32>, away: Option<i32>) -> Fixture {
    Fixture {
        id: "f1".to_owned(),
        home_team_id: Some("t1".to_owned()),
        home_team_name: Some("Falcons".to_owned()),
        away_team_id: Some("t2".to_owned()),
        away_team_name: Some("Otters".to_owned()),
        competition_name: Some("City League".to_owned()),
        venue: None,
        match_date: None,
        status: None,
        home_score: home,
        away_score: away,
    }
}

#[test]
fn score_shows_both_goals_once_played() {
    assert_eq!(format_score(&fixture(Some(2), Some(1))), "2 : 1");
}

#[test]
fn score_is_dashes_until_both_sides_exist() {
    assert_eq!(format_score(&fixture(None, None)), "- : -");
    assert_eq!(format_score(&fixture(Some(2), None)), "- : -");
}

#[test]
fn pairing_names_both_teams() {
    assert_eq!(format_pairing(&fixture(None, None)), "Falcons vs Otters");
}

#[test]
fn pairing_falls_back_to_tbd() {
    let mut f = fixture(None, None);
    f.away_team_name = None;
    assert_eq!(format_pairing(&f), "Falcons vs TBD");
}
