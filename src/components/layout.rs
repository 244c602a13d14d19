//! Application chrome: top navigation, user menu, theme toggle.
//!
//! Nav links are filtered by the session's cached roles — the same rule set
//! the route guard applies, so a visible link never leads straight to the
//! unauthorized screen.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::theme;

/// One entry in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// The nav entries this session may see, in display order.
pub fn visible_links(session: &SessionState) -> Vec<NavLink> {
    let has = |roles: &[Role]| roles.iter().any(|r| session.has_role(*r));
    let mut links = Vec::new();
    let mut push = |visible: bool, label, path| {
        if visible {
            links.push(NavLink { label, path });
        }
    };
    push(has(&[Role::Admin, Role::Manager, Role::Coach]), "Dashboard", "/dashboard");
    push(true, "Fixtures", "/fixtures");
    push(true, "Standings", "/standings");
    push(true, "Posts", "/posts");
    push(has(&[Role::Admin]), "Competitions", "/competitions");
    push(has(&[Role::Admin, Role::Manager]), "Clubs", "/clubs");
    push(has(&[Role::Admin, Role::Manager, Role::Coach]), "Teams", "/teams");
    push(has(&[Role::Admin, Role::Manager, Role::Coach]), "Players", "/players");
    push(has(&[Role::Admin, Role::Manager]), "Subscriptions", "/subscriptions");
    push(has(&[Role::Admin]), "Users", "/admin/users");
    links
}

/// Shell wrapping every page: nav bar on top, routed content below.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let theme = RwSignal::new(theme::read_preference());
    theme::apply(theme.get_untracked());
    let on_toggle_theme = move |_| {
        theme.set(theme::toggle(theme.get()));
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout(&api, session).await;
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate);
        }
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <A href="/" attr:class="app-brand">
                    "SportsMS"
                </A>
                <nav class="app-nav">
                    {move || {
                        visible_links(&session.get())
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <A href=link.path attr:class="app-nav__link">
                                        {link.label}
                                    </A>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <div class="app-header__right">
                    <button class="app-header__theme" on:click=on_toggle_theme>
                        {move || if theme.get() == theme::Theme::Dark { "Light" } else { "Dark" }}
                    </button>
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <A href="/login" attr:class="app-header__link">
                                    "Sign in"
                                </A>
                                <A href="/register" attr:class="app-header__link">
                                    "Register"
                                </A>
                            }
                        }
                    >
                        <span class="app-header__user">
                            {move || {
                                session.get().display_name().unwrap_or("Signed in").to_owned()
                            }}
                        </span>
                        <button class="app-header__logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
