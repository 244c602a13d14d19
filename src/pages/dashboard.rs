//! Staff dashboard: headline counters and upcoming fixtures.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::fetch_dashboard;
use crate::net::http::ApiClient;
use crate::net::types::{DashboardResponse, Role};
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin, Role::Manager, Role::Coach];

fn stat_cards(data: &DashboardResponse) -> Vec<(&'static str, i64)> {
    vec![
        ("Clubs", data.summary.clubs),
        ("Teams", data.summary.teams),
        ("Players", data.summary.players),
        ("Fixtures", data.summary.fixtures),
        ("Subscriptions", data.summary.subscriptions),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let dashboard = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_dashboard(&api).await }
    });

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    dashboard
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! {
                                    <div class="dashboard-page__stats">
                                        {stat_cards(&data)
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <div class="stat-card">
                                                        <span class="stat-card__value">{value}</span>
                                                        <span class="stat-card__label">{label}</span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <h2>"Upcoming matches"</h2>
                                    <ul class="dashboard-page__matches">
                                        {data
                                            .upcoming_matches
                                            .iter()
                                            .map(|fixture| {
                                                let home = fixture
                                                    .home_team_name
                                                    .clone()
                                                    .unwrap_or_else(|| "TBD".to_owned());
                                                let away = fixture
                                                    .away_team_name
                                                    .clone()
                                                    .unwrap_or_else(|| "TBD".to_owned());
                                                let date = fixture.match_date.clone().unwrap_or_default();
                                                view! {
                                                    <li class="dashboard-page__match">
                                                        {format!("{home} vs {away}")}
                                                        <span class="dashboard-page__date">{date}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="page-error">{err.message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
