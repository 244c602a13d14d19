//! Session state machine for the current browser user.
//!
//! DESIGN
//! ======
//! [`SessionState`] is an immutable snapshot held in an `RwSignal` and
//! replaced wholesale on every transition, so consumers always observe a
//! consistent token/roles/user triple. The phase is a pure projection of
//! the snapshot: a usable access token plus a confirmed user means
//! `Authenticated`; a usable token still waiting on its profile fetch means
//! `Syncing`; anything else is `Anonymous`. A token string alone never
//! counts as authenticated — the profile fetch must have succeeded in this
//! browser at least once.
//!
//! Transitions that fail mid-way never leave a half-adopted session: a
//! login whose profile fetch fails rolls the freshly written credentials
//! back, and a bootstrap sync that resolves after its token was replaced is
//! discarded (see [`fetch_is_current`]).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::{
    AuthResponse, LoginRequest, LogoutRequest, RegisterRequest, parse_roles,
};
use crate::net::types::{Profile, Role};
use crate::state::storage::{self, StoredSession};

/// Lifecycle phase of the session, derived rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No usable access token.
    Anonymous,
    /// Usable token adopted, profile fetch not yet settled.
    Syncing,
    /// Usable token and a server-confirmed user.
    Authenticated,
}

/// Immutable session snapshot; replace-on-write, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    roles: Vec<Role>,
    user: Option<Profile>,
}

impl SessionState {
    /// The signed-out state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A token adopted from storage or a fresh login, awaiting its profile.
    pub fn pending(access_token: String, refresh_token: Option<String>, roles: Vec<Role>) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token,
            roles,
            user: None,
        }
    }

    /// A fully confirmed session.
    pub fn authenticated(
        access_token: String,
        refresh_token: Option<String>,
        roles: Vec<Role>,
        user: Profile,
    ) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token,
            roles,
            user: Some(user),
        }
    }

    /// Project a durable snapshot into an in-memory session. Unusable
    /// tokens (empty, `"null"`, `"undefined"`) collapse to [`Self::anonymous`].
    pub fn from_store(stored: &StoredSession) -> Self {
        let Some(access) = storage::usable_token(stored.access_token.as_deref()) else {
            return Self::anonymous();
        };
        Self {
            access_token: Some(access.to_owned()),
            refresh_token: storage::usable_token(stored.refresh_token.as_deref()).map(str::to_owned),
            roles: stored.roles.clone(),
            user: stored.user.clone(),
        }
    }

    /// Pure phase projection from credentials + user.
    pub fn phase(&self) -> SessionPhase {
        match (&self.access_token, &self.user) {
            (Some(_), Some(_)) => SessionPhase::Authenticated,
            (Some(_), None) => SessionPhase::Syncing,
            (None, _) => SessionPhase::Anonymous,
        }
    }

    /// True only with both a usable token and a confirmed user.
    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Synchronous role lookup against the cached role set; never does I/O.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Name shown in the navigation chrome.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.full_name.as_str())
    }
}

/// Stale-write guard: a profile fetch result may only be applied if the
/// token it was initiated for is still the token live in storage.
pub fn fetch_is_current(initiated: &str, live: Option<&str>) -> bool {
    match (storage::usable_token(Some(initiated)), live) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Synchronous, idempotent forced sign-out: empty the token store and
/// replace the session with [`SessionState::anonymous`].
pub fn clear_auth(session: RwSignal<SessionState>) {
    storage::clear();
    session.set(SessionState::anonymous());
}

/// Adopt whatever the token store holds on process start.
///
/// An unusable stored token resolves straight to `Anonymous` with no
/// network call. A usable token with a cached user (profile already
/// confirmed in this browser) resolves to `Authenticated` directly. A
/// usable token without a user enters `Syncing` and fetches the profile;
/// failure clears storage silently, and a result arriving after the token
/// was replaced (or cleared by a forced sign-out) is discarded.
pub fn bootstrap(api: ApiClient, session: RwSignal<SessionState>) {
    let initial = SessionState::from_store(&storage::read());
    let needs_sync = initial.phase() == SessionPhase::Syncing;
    let initiated = initial.access_token().map(str::to_owned);
    session.set(initial);
    if !needs_sync {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(initiated) = initiated else {
            return;
        };
        let result = crate::net::api::fetch_profile(&api).await;
        if !fetch_is_current(&initiated, storage::read_access_token().as_deref()) {
            leptos::logging::log!("discarding stale profile sync result");
            return;
        }
        match result {
            Ok(resp) => {
                let stored = storage::read();
                let roles = if resp.roles.is_empty() {
                    stored.roles
                } else {
                    parse_roles(&resp.roles)
                };
                let refresh = storage::usable_token(stored.refresh_token.as_deref())
                    .map(str::to_owned);
                let profile = resp.into_profile();
                storage::write(
                    &initiated,
                    refresh.as_deref().unwrap_or_default(),
                    &roles,
                    Some(&profile),
                );
                session.set(SessionState::authenticated(initiated, refresh, roles, profile));
            }
            Err(err) => {
                // An unconfirmable token is dropped, not kept half-adopted.
                leptos::logging::warn!("profile sync failed, signing out: {err}");
                clear_auth(session);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, initiated);
    }
}

/// Sign in with email + password, then confirm the profile.
///
/// The credential write precedes the profile fetch so the gateway attaches
/// the new token to it. If the profile fetch fails the partially adopted
/// credentials are rolled back and the whole login reports failure.
///
/// # Errors
///
/// Returns [`ApiError`] from either the login call or the profile fetch.
#[cfg(feature = "hydrate")]
pub async fn login(
    api: &ApiClient,
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let auth = crate::net::api::login(
        api,
        &LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        },
    )
    .await?;
    adopt_credentials(api, session, auth).await
}

/// Create an account, then sign in with the returned credentials.
///
/// # Errors
///
/// Returns [`ApiError`] from either the register call or the profile fetch.
#[cfg(feature = "hydrate")]
pub async fn register(
    api: &ApiClient,
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), ApiError> {
    let auth = crate::net::api::register(
        api,
        &RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            full_name: full_name.to_owned(),
        },
    )
    .await?;
    adopt_credentials(api, session, auth).await
}

/// Sign out: best-effort server invalidation of the refresh token, then an
/// unconditional local clear. Server failures are logged and swallowed —
/// client-side sign-out must always complete.
#[cfg(feature = "hydrate")]
pub async fn logout(api: &ApiClient, session: RwSignal<SessionState>) {
    if let Some(refresh_token) = storage::read_refresh_token() {
        if let Err(err) = crate::net::api::logout(api, &LogoutRequest { refresh_token }).await {
            leptos::logging::warn!("logout call failed (ignored): {err}");
        }
    }
    clear_auth(session);
}

#[cfg(feature = "hydrate")]
async fn adopt_credentials(
    api: &ApiClient,
    session: RwSignal<SessionState>,
    auth: AuthResponse,
) -> Result<(), ApiError> {
    let roles = parse_roles(&auth.roles);
    // Step one: persist the fresh credentials so the profile fetch below
    // goes out with the new token attached.
    storage::write(&auth.access_token, &auth.refresh_token, &roles, None);

    match crate::net::api::fetch_profile(api).await {
        Ok(resp) => {
            if !fetch_is_current(&auth.access_token, storage::read_access_token().as_deref()) {
                // A newer login replaced this token while the fetch was in
                // flight; that flow owns the session now.
                leptos::logging::log!("discarding superseded login result");
                return Ok(());
            }
            let roles = if resp.roles.is_empty() {
                roles
            } else {
                parse_roles(&resp.roles)
            };
            let profile = resp.into_profile();
            // Step two: token + roles + user land in storage as one write.
            storage::write(&auth.access_token, &auth.refresh_token, &roles, Some(&profile));
            session.set(SessionState::authenticated(
                auth.access_token,
                Some(auth.refresh_token),
                roles,
                profile,
            ));
            Ok(())
        }
        Err(err) => {
            // Profile fetch failed: this is a failed login overall. Only
            // roll back if the credentials are still ours — a 401 will have
            // already cleared them through the gateway's sink.
            if fetch_is_current(&auth.access_token, storage::read_access_token().as_deref()) {
                clear_auth(session);
            }
            Err(err)
        }
    }
}
