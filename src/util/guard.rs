//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Advisory UX routing only — the server re-checks authorization on every
//! request regardless of what the client admits.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::{SessionPhase, SessionState};

/// Outcome of evaluating a protected route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Admit,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Decide whether the session may enter a view requiring `required` roles.
///
/// An unauthenticated session always redirects to login, even when roles
/// would also mismatch. An empty `required` set means "any authenticated
/// user" and never redirects on role grounds; otherwise one overlapping
/// role admits.
pub fn decide(session: &SessionState, required: &[Role]) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }
    if !required.is_empty() && !required.iter().any(|role| session.has_role(*role)) {
        return GuardDecision::RedirectToUnauthorized;
    }
    GuardDecision::Admit
}

/// Re-evaluate the guard whenever the session changes and navigate on a
/// redirect decision.
///
/// While the session is still `Syncing` (bootstrap profile fetch in
/// flight) no decision is taken, so a reload on a protected page does not
/// bounce to `/login` before the sync settles.
pub fn install_guard<F>(session: RwSignal<SessionState>, required: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if state.phase() == SessionPhase::Syncing {
            return;
        }
        match decide(&state, required) {
            GuardDecision::Admit => {}
            GuardDecision::RedirectToLogin => navigate("/login", NavigateOptions::default()),
            GuardDecision::RedirectToUnauthorized => {
                navigate("/unauthorized", NavigateOptions::default());
            }
        }
    });
}
