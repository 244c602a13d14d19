use super::*;
use crate::net::types::Profile;

fn authed(roles: Vec<Role>) -> SessionState {
    SessionState::authenticated(
        "at-1".to_owned(),
        None,
        roles,
        Profile {
            id: "u1".to_owned(),
            email: "a@b.test".to_owned(),
            full_name: "Alex Able".to_owned(),
        },
    )
}

fn labels(session: &SessionState) -> Vec<&'static str> {
    visible_links(session).into_iter().map(|l| l.label).collect()
}

#[test]
fn anonymous_visitors_see_only_public_links() {
    assert_eq!(
        labels(&SessionState::anonymous()),
        vec!["Fixtures", "Standings", "Posts"]
    );
}

#[test]
fn syncing_sessions_keep_their_cached_role_links() {
    // Links come from the cached role set, so the nav does not flicker to
    // public-only while the bootstrap profile fetch is in flight.
    let state = SessionState::pending("at-1".to_owned(), None, vec![Role::Admin]);
    let shown = labels(&state);
    assert!(shown.contains(&"Dashboard"));
    assert!(shown.contains(&"Users"));
}

#[test]
fn admin_sees_every_link() {
    assert_eq!(
        labels(&authed(vec![Role::Admin])),
        vec![
            "Dashboard",
            "Fixtures",
            "Standings",
            "Posts",
            "Competitions",
            "Clubs",
            "Teams",
            "Players",
            "Subscriptions",
            "Users",
        ]
    );
}

#[test]
fn manager_sees_club_management_but_not_admin_links() {
    assert_eq!(
        labels(&authed(vec![Role::Manager])),
        vec![
            "Dashboard",
            "Fixtures",
            "Standings",
            "Posts",
            "Clubs",
            "Teams",
            "Players",
            "Subscriptions",
        ]
    );
}

#[test]
fn coach_sees_team_links_only() {
    assert_eq!(
        labels(&authed(vec![Role::Coach])),
        vec!["Dashboard", "Fixtures", "Standings", "Posts", "Teams", "Players"]
    );
}

#[test]
fn player_sees_only_public_links() {
    assert_eq!(
        labels(&authed(vec![Role::Player])),
        vec!["Fixtures", "Standings", "Posts"]
    );
}

#[test]
fn every_link_path_is_rooted() {
    for link in visible_links(&authed(vec![Role::Admin])) {
        assert!(link.path.starts_with('/'), "{} is not rooted", link.path);
    }
}
