//! Root application component: routing, context wiring, session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the one place that knows about both the gateway and the session
//! state machine: the [`ApiClient`] is constructed here with a sink that
//! clears the session signal, so the 401 path can terminate the session
//! without the gateway ever importing the state machine.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::net::http::{ApiClient, SessionSink};
use crate::pages::{
    clubs::ClubsPage, competitions::CompetitionsPage, dashboard::DashboardPage,
    fixtures::FixturesPage, home::HomePage, login::LoginPage, players::PlayersPage,
    post_detail::PostDetailPage, posts::PostsPage, register::RegisterPage,
    standings::StandingsPage, subscriptions::SubscriptionsPage, teams::TeamsPage,
    unauthorized::UnauthorizedPage, users::UsersPage,
};
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Forced sign-out capability handed to the gateway. Synchronous and
/// idempotent; safe to fire for several concurrent 401s.
struct SessionClearer {
    session: RwSignal<SessionState>,
}

impl SessionSink for SessionClearer {
    fn clear_session(&self) {
        session::clear_auth(self.session);
    }
}

/// Root application component.
///
/// Provides the session signal and the gateway as contexts, bootstraps the
/// session from durable storage once on startup, and declares the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::anonymous());
    provide_context(session);

    let api = ApiClient::new(Arc::new(SessionClearer { session }));
    provide_context(api.clone());

    // Adopt stored credentials once the client is running. Effects do not
    // execute during SSR, so this only happens in the browser.
    Effect::new(move || {
        session::bootstrap(api.clone(), session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sportsms.css"/>
        <Title text="SportsMS"/>

        <Router>
            <AppLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostDetailPage/>
                    <Route path=StaticSegment("fixtures") view=FixturesPage/>
                    <Route path=StaticSegment("standings") view=StandingsPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("clubs") view=ClubsPage/>
                    <Route path=StaticSegment("teams") view=TeamsPage/>
                    <Route path=StaticSegment("players") view=PlayersPage/>
                    <Route path=StaticSegment("competitions") view=CompetitionsPage/>
                    <Route path=StaticSegment("subscriptions") view=SubscriptionsPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=UsersPage
                    />
                </Routes>
            </AppLayout>
        </Router>
    }
}
