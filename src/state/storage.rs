//! Durable token store backed by `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "does a session exist". The HTTP gateway reads
//! the access token from here on every request, and the session state machine
//! is the only other writer. All operations are synchronous; `read` never
//! fails — corrupted role or user caches decode to empty/`None`.
//!
//! The four keys are always written together and cleared together so a token
//! can never be observed next to roles or a user from a different session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::{Profile, Role};

const ACCESS_TOKEN_KEY: &str = "sportsms_access_token";
const REFRESH_TOKEN_KEY: &str = "sportsms_refresh_token";
const ROLES_KEY: &str = "sportsms_roles";
const USER_KEY: &str = "sportsms_user";

/// Everything the store holds, as one snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredSession {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub roles: Vec<Role>,
    pub user: Option<Profile>,
}

/// Normalize a raw token value to a usable one.
///
/// A token is usable only if it is non-empty after trimming and not a
/// stringified null sentinel (`"null"`/`"undefined"`), which older buggy
/// code paths could write into storage.
pub fn usable_token(raw: Option<&str>) -> Option<&str> {
    let trimmed = raw?.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("undefined")
    {
        return None;
    }
    Some(trimmed)
}

/// Decode the serialized role cache, falling back to an empty set on any
/// parse failure or unknown tag.
pub fn decode_roles(raw: Option<&str>) -> Vec<Role> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(raw)
        .map(|tags| tags.iter().filter_map(|t| Role::parse(t)).collect())
        .unwrap_or_default()
}

/// Serialize roles for storage.
pub fn encode_roles(roles: &[Role]) -> String {
    let tags: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
    serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_owned())
}

/// Decode the cached user blob; anything unreadable is treated as absent.
pub fn decode_user(raw: Option<&str>) -> Option<Profile> {
    serde_json::from_str(raw?).ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the current snapshot. Never fails; a missing or unreadable store
/// reads as an empty session.
pub fn read() -> StoredSession {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return StoredSession::default();
        };
        let get = |key: &str| storage.get_item(key).ok().flatten();
        StoredSession {
            access_token: get(ACCESS_TOKEN_KEY),
            refresh_token: get(REFRESH_TOKEN_KEY),
            roles: decode_roles(get(ROLES_KEY).as_deref()),
            user: decode_user(get(USER_KEY).as_deref()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        StoredSession::default()
    }
}

/// Read just the access token, already normalized for usability.
pub fn read_access_token() -> Option<String> {
    let snapshot = read();
    usable_token(snapshot.access_token.as_deref()).map(str::to_owned)
}

/// Read just the refresh token, already normalized for usability.
pub fn read_refresh_token() -> Option<String> {
    let snapshot = read();
    usable_token(snapshot.refresh_token.as_deref()).map(str::to_owned)
}

/// Persist a full credential set plus its role/user cache in one pass.
pub fn write(access_token: &str, refresh_token: &str, roles: &[Role], user: Option<&Profile>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
        let _ = storage.set_item(ROLES_KEY, &encode_roles(roles));
        match user.and_then(|u| serde_json::to_string(u).ok()) {
            Some(blob) => {
                let _ = storage.set_item(USER_KEY, &blob);
            }
            None => {
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, refresh_token, roles, user);
    }
}

/// Remove every session key. Idempotent and immediately visible.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            let _ = storage.remove_item(ROLES_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
