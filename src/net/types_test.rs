use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parse_known_tags() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("MANAGER"), Some(Role::Manager));
    assert_eq!(Role::parse("COACH"), Some(Role::Coach));
    assert_eq!(Role::parse("PLAYER"), Some(Role::Player));
    assert_eq!(Role::parse("REFEREE"), Some(Role::Referee));
    assert_eq!(Role::parse("VIEWER"), Some(Role::Viewer));
}

#[test]
fn role_parse_trims_whitespace() {
    assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
}

#[test]
fn role_parse_rejects_unknown_and_lowercase() {
    assert_eq!(Role::parse("SUPERUSER"), None);
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_round_trips_through_as_str() {
    for role in [
        Role::Admin,
        Role::Manager,
        Role::Coach,
        Role::Player,
        Role::Referee,
        Role::Viewer,
    ] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn parse_roles_drops_unknown_tags() {
    let raw = vec![
        "ADMIN".to_owned(),
        "SUPERUSER".to_owned(),
        "COACH".to_owned(),
    ];
    assert_eq!(parse_roles(&raw), vec![Role::Admin, Role::Coach]);
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn auth_response_decodes_camel_case() {
    let json = r#"{"accessToken":"at-1","refreshToken":"rt-1","roles":["ADMIN"]}"#;
    let decoded: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(decoded.access_token, "at-1");
    assert_eq!(decoded.refresh_token, "rt-1");
    assert_eq!(decoded.roles, vec!["ADMIN".to_owned()]);
}

#[test]
fn auth_response_roles_default_to_empty() {
    let json = r#"{"accessToken":"at-1","refreshToken":"rt-1"}"#;
    let decoded: AuthResponse = serde_json::from_str(json).unwrap();
    assert!(decoded.roles.is_empty());
}

#[test]
fn profile_response_decodes_without_roles() {
    let json = r#"{"id":"u1","email":"a@b.com","fullName":"Alice Alson"}"#;
    let decoded: ProfileResponse = serde_json::from_str(json).unwrap();
    assert!(decoded.roles.is_empty());
    let profile = decoded.into_profile();
    assert_eq!(profile.full_name, "Alice Alson");
}

#[test]
fn register_request_serializes_full_name_camel_case() {
    let body = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "secret123".to_owned(),
        full_name: "Alice Alson".to_owned(),
    };
    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains("\"fullName\":\"Alice Alson\""));
}

#[test]
fn logout_request_serializes_refresh_token_camel_case() {
    let body = LogoutRequest {
        refresh_token: "rt-1".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"refreshToken":"rt-1"}"#
    );
}

#[test]
fn fixture_decodes_partial_payload() {
    let json = r#"{"id":"f1","homeTeamName":"Lions","awayTeamName":"Tigers","matchDate":"2026-03-01T15:00:00Z"}"#;
    let decoded: Fixture = serde_json::from_str(json).unwrap();
    assert_eq!(decoded.home_team_name.as_deref(), Some("Lions"));
    assert_eq!(decoded.home_score, None);
    assert_eq!(decoded.status, None);
}

#[test]
fn standings_response_table_defaults_to_empty() {
    let json = r#"{"competitionId":"c1","seasonId":"s1"}"#;
    let decoded: StandingsResponse = serde_json::from_str(json).unwrap();
    assert!(decoded.table.is_empty());
}

#[test]
fn post_page_content_defaults_to_empty() {
    let decoded: PostPage = serde_json::from_str("{}").unwrap();
    assert!(decoded.content.is_empty());
}

#[test]
fn subscription_plan_decodes_type_field() {
    let json = r#"{"id":"p1","name":"Basic","type":"Club membership","billingPeriod":"MONTHLY"}"#;
    let decoded: SubscriptionPlan = serde_json::from_str(json).unwrap();
    assert_eq!(decoded.kind.as_deref(), Some("Club membership"));
    assert_eq!(decoded.billing_period.as_deref(), Some("MONTHLY"));
}

#[test]
fn dashboard_response_decodes_empty_body() {
    let decoded: DashboardResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(decoded.summary.clubs, 0);
    assert!(decoded.upcoming_matches.is_empty());
}
