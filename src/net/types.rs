//! Wire DTOs for the REST API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads (camelCase) so serde
//! round-trips stay lossless. Roles travel as plain strings and are parsed
//! tolerantly into [`Role`]: an unknown tag is dropped rather than failing
//! the whole response, keeping the role vocabulary open to extension.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Coarse permission tag used for client-side route gating.
///
/// The server remains authoritative; these only drive UX routing and
/// nav-link visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Coach,
    Player,
    Referee,
    Viewer,
}

impl Role {
    /// Parse a server role tag. Unknown tags yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "ADMIN" => Some(Self::Admin),
            "MANAGER" => Some(Self::Manager),
            "COACH" => Some(Self::Coach),
            "PLAYER" => Some(Self::Player),
            "REFEREE" => Some(Self::Referee),
            "VIEWER" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// The wire/storage spelling of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Coach => "COACH",
            Self::Player => "PLAYER",
            Self::Referee => "REFEREE",
            Self::Viewer => "VIEWER",
        }
    }
}

/// Convert a list of server role tags, dropping anything unrecognized.
pub fn parse_roles(raw: &[String]) -> Vec<Role> {
    raw.iter().filter_map(|r| Role::parse(r)).collect()
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Credential set returned by login and register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body for `POST /api/auth/logout`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// The authenticated user's identity, as cached client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// Response of `GET /api/auth/me`. Roles are optional on this endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl ProfileResponse {
    /// Strip the role list down to the cacheable identity.
    pub fn into_profile(self) -> Profile {
        Profile {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
        }
    }
}

/// A club as returned by `GET /api/clubs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub created_at: Option<String>,
}

/// Body for `POST /api/clubs`.
#[derive(Clone, Debug, Serialize)]
pub struct ClubRequest {
    pub name: String,
    pub city: Option<String>,
}

/// A team with denormalized club/coach names for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub club_id: Option<String>,
    pub club_name: Option<String>,
    pub coach_name: Option<String>,
    pub home_ground: Option<String>,
    pub logo_url: Option<String>,
}

/// Body for `POST /api/teams`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub name: String,
    pub club_id: String,
    pub coach_name: Option<String>,
    pub home_ground: Option<String>,
}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub status: Option<String>,
}

/// A competition (league or cup).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A season within the competition calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A scheduled or played fixture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: String,
    pub home_team_id: Option<String>,
    pub home_team_name: Option<String>,
    pub away_team_id: Option<String>,
    pub away_team_name: Option<String>,
    pub competition_name: Option<String>,
    pub venue: Option<String>,
    pub match_date: Option<String>,
    pub status: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

/// One row of a league table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: String,
    pub team_name: String,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

/// Response of `GET /api/standings`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub competition_id: Option<String>,
    pub season_id: Option<String>,
    #[serde(default)]
    pub table: Vec<TeamStanding>,
}

/// A published news post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub author_name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// Paged wrapper the posts endpoint returns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PostPage {
    #[serde(default)]
    pub content: Vec<Post>,
}

/// A subscription plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub billing_period: Option<String>,
}

/// Body for `POST /api/subscriptions/plans`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub currency: String,
    pub billing_period: String,
    pub grace_days: i32,
    pub active: bool,
}

/// A user account as seen by administrators.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: Option<String>,
}

/// Aggregate counters on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardCounts {
    #[serde(default)]
    pub clubs: i64,
    #[serde(default)]
    pub teams: i64,
    #[serde(default)]
    pub players: i64,
    #[serde(default)]
    pub fixtures: i64,
    #[serde(default)]
    pub subscriptions: i64,
}

/// A labeled numeric widget (e.g. subscriptions by status).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusWidget {
    pub label: String,
    pub value: f64,
}

/// Response of `GET /api/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(default)]
    pub summary: DashboardCounts,
    #[serde(default)]
    pub upcoming_matches: Vec<Fixture>,
    #[serde(default)]
    pub subscription_statuses: Vec<StatusWidget>,
}
