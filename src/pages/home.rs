//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Sports Management"</h1>
            <p class="home-page__lead">
                "Clubs, teams, fixtures and league tables in one place."
            </p>
            <div class="home-page__actions">
                <A href="/fixtures" attr:class="btn btn--primary">
                    "Browse fixtures"
                </A>
                <A href="/standings" attr:class="btn">
                    "League standings"
                </A>
                <A href="/posts" attr:class="btn">
                    "News & announcements"
                </A>
            </div>
        </div>
    }
}
