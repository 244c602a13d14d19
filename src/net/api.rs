//! Typed REST endpoint wrappers over the [`ApiClient`] gateway.
//!
//! One function per endpoint; pages call these instead of spelling out
//! paths and payloads inline. All credential plumbing happens inside the
//! gateway, so nothing here touches tokens.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{
    AdminUser, AuthResponse, Club, ClubRequest, Competition, DashboardResponse, Fixture,
    LoginRequest, LogoutRequest, PlayerRecord, Post, PostPage, ProfileResponse, RegisterRequest,
    Season, StandingsResponse, SubscriptionPlan, SubscriptionPlanRequest, Team, TeamRequest,
};

/// `POST /api/auth/login` — exchange credentials for a token pair.
///
/// # Errors
///
/// Returns [`ApiError`] with the server's message on bad credentials.
pub async fn login(api: &ApiClient, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
    api.post_json("/api/auth/login", body).await
}

/// `POST /api/auth/register` — create an account and sign in.
///
/// # Errors
///
/// Returns [`ApiError`] with the server's validation message on failure.
pub async fn register(api: &ApiClient, body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api.post_json("/api/auth/register", body).await
}

/// `GET /api/auth/me` — fetch the profile for the current access token.
///
/// # Errors
///
/// Returns [`ApiError`]; a 401 here also triggers the gateway's forced
/// sign-out path.
pub async fn fetch_profile(api: &ApiClient) -> Result<ProfileResponse, ApiError> {
    api.get_json("/api/auth/me").await
}

/// `POST /api/auth/logout` — invalidate a refresh token server-side.
///
/// # Errors
///
/// Returns [`ApiError`]; callers treat this call as best-effort.
pub async fn logout(api: &ApiClient, body: &LogoutRequest) -> Result<(), ApiError> {
    api.post_unit("/api/auth/logout", body).await
}

/// `GET /api/clubs`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_clubs(api: &ApiClient) -> Result<Vec<Club>, ApiError> {
    api.get_json("/api/clubs").await
}

/// `POST /api/clubs`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn create_club(api: &ApiClient, body: &ClubRequest) -> Result<Club, ApiError> {
    api.post_json("/api/clubs", body).await
}

/// `GET /api/teams`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_teams(api: &ApiClient) -> Result<Vec<Team>, ApiError> {
    api.get_json("/api/teams").await
}

/// `POST /api/teams`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn create_team(api: &ApiClient, body: &TeamRequest) -> Result<Team, ApiError> {
    api.post_json("/api/teams", body).await
}

/// `GET /api/players`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_players(api: &ApiClient) -> Result<Vec<PlayerRecord>, ApiError> {
    api.get_json("/api/players").await
}

/// `GET /api/competitions`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_competitions(api: &ApiClient) -> Result<Vec<Competition>, ApiError> {
    api.get_json("/api/competitions").await
}

/// `GET /api/competitions/seasons`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_seasons(api: &ApiClient) -> Result<Vec<Season>, ApiError> {
    api.get_json("/api/competitions/seasons").await
}

/// `GET /api/fixtures`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_fixtures(api: &ApiClient) -> Result<Vec<Fixture>, ApiError> {
    api.get_json("/api/fixtures").await
}

/// `GET /api/standings?competitionId=..&seasonId=..`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_standings(
    api: &ApiClient,
    competition_id: &str,
    season_id: &str,
) -> Result<StandingsResponse, ApiError> {
    let path = format!("/api/standings?competitionId={competition_id}&seasonId={season_id}");
    api.get_json(&path).await
}

/// `GET /api/posts/published` — first page of published posts, optionally
/// filtered by keyword.
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_published_posts(api: &ApiClient, keyword: &str) -> Result<PostPage, ApiError> {
    let mut path = "/api/posts/published?page=0&size=12".to_owned();
    if !keyword.trim().is_empty() {
        path.push_str("&keyword=");
        path.push_str(keyword.trim());
    }
    api.get_json(&path).await
}

/// `GET /api/posts/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_post(api: &ApiClient, id: &str) -> Result<Post, ApiError> {
    api.get_json(&format!("/api/posts/{id}")).await
}

/// `GET /api/subscriptions/plans`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_subscription_plans(api: &ApiClient) -> Result<Vec<SubscriptionPlan>, ApiError> {
    api.get_json("/api/subscriptions/plans").await
}

/// `POST /api/subscriptions/plans`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn create_subscription_plan(
    api: &ApiClient,
    body: &SubscriptionPlanRequest,
) -> Result<SubscriptionPlan, ApiError> {
    api.post_json("/api/subscriptions/plans", body).await
}

/// `GET /api/admin/users`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_users(api: &ApiClient) -> Result<Vec<AdminUser>, ApiError> {
    api.get_json("/api/admin/users").await
}

/// `GET /api/dashboard`
///
/// # Errors
///
/// Returns [`ApiError`] on any failed request.
pub async fn fetch_dashboard(api: &ApiClient) -> Result<DashboardResponse, ApiError> {
    api.get_json("/api/dashboard").await
}
