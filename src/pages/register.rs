//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::state::session::SessionState;

/// Server requires a name, an email, and a password of at least 8 chars;
/// checking here saves a round trip.
fn validate_register_input(
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    let password = password.trim();
    if full_name.is_empty() || email.is_empty() {
        return Err("Enter your full name and email.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok((full_name.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_register_input(&full_name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::register(
                    &api,
                    session,
                    &email_value,
                    &password_value,
                    &name_value,
                )
                .await
                {
                    Ok(()) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(err.message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
            </div>
        </div>
    }
}
