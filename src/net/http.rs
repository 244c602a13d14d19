//! HTTP gateway: the single outbound request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call goes through [`ApiClient`] so credential attachment and
//! 401 handling live in exactly one place. The request side reads the token
//! store and attaches `Authorization: Bearer <token>` only when a usable
//! token exists; an unusable value (empty, `"null"`, `"undefined"`) sends no
//! header at all. The response side turns any non-2xx into [`ApiError`] and,
//! on 401, clears the session through an injected [`SessionSink`] and
//! redirects to the login screen tagged with a "session expired" reason —
//! unless the user is already there.
//!
//! The sink is a one-method capability supplied at construction by the app
//! wiring, so this module never depends on the session state machine itself.
//! The gateway never retries and never swallows a failure: the rejected
//! operation still propagates to whichever page issued it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::error::{ErrorBody, resolve_message};
use crate::state::storage;

/// Capability to terminate the current session, injected into the gateway.
///
/// Implementations must be synchronous and idempotent; the 401 path may fire
/// for several concurrent requests.
pub trait SessionSink: Send + Sync {
    fn clear_session(&self);
}

/// Login screen path; 401 redirects are suppressed when already here.
pub const LOGIN_PATH: &str = "/login";

/// Redirect target for a forced sign-out, carrying the reason the login
/// page uses to show its "session expired" notice.
pub const EXPIRED_REDIRECT: &str = "/login?reason=expired";

/// Decide whether a 401 at `current_path` should navigate, and where to.
pub fn expired_redirect(current_path: &str) -> Option<&'static str> {
    let on_login = current_path == LOGIN_PATH
        || current_path
            .strip_prefix(LOGIN_PATH)
            .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'));
    if on_login { None } else { Some(EXPIRED_REDIRECT) }
}

/// Authorization header value for a raw stored token, or `None` when the
/// token is not usable.
pub fn bearer_for(raw: Option<&str>) -> Option<String> {
    storage::usable_token(raw).map(|token| format!("Bearer {token}"))
}

/// Shared HTTP client carrying the session-clearing capability.
#[derive(Clone)]
pub struct ApiClient {
    sink: Arc<dyn SessionSink>,
}

impl ApiClient {
    pub fn new(sink: Arc<dyn SessionSink>) -> Self {
        Self { sink }
    }

    /// GET `path` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_bearer(gloo_net::http::Request::get(path))
                .send()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))?;
            self.observe(&resp).await?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    /// POST a JSON `body` to `path` and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_bearer(gloo_net::http::Request::post(path))
                .json(body)
                .map_err(|e| ApiError::transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))?;
            self.observe(&resp).await?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// POST a JSON `body` to `path`, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_bearer(gloo_net::http::Request::post(path))
                .json(body)
                .map_err(|e| ApiError::transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::transport(e.to_string()))?;
            self.observe(&resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// Inspect a response: pass 2xx through, map everything else to an
    /// [`ApiError`], and run the forced sign-out path on 401.
    #[cfg(feature = "hydrate")]
    async fn observe(&self, resp: &gloo_net::http::Response) -> Result<(), ApiError> {
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body_message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        let message = resolve_message(status, body_message);
        if status == 401 {
            // Clear first so the login screen never sees leftover credentials.
            self.sink.clear_session();
            redirect_after_expiry();
        }
        Err(ApiError::status(status, message))
    }
}

#[cfg(feature = "hydrate")]
fn with_bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let stored = storage::read();
    match bearer_for(stored.access_token.as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn redirect_after_expiry() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    if let Some(target) = expired_redirect(&path) {
        let _ = location.set_href(target);
    }
}
