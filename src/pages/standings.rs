//! Public league table, selectable by competition and season.

use leptos::prelude::*;

use crate::net::api::{fetch_competitions, fetch_seasons, fetch_standings};
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::StandingsResponse;

#[component]
pub fn StandingsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let competitions = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_competitions(&api).await }
        }
    });
    let seasons = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_seasons(&api).await }
        }
    });

    let competition_id = RwSignal::new(String::new());
    let season_id = RwSignal::new(String::new());

    // Refetches whenever either selection changes.
    let standings = LocalResource::new(move || {
        let api = api.clone();
        let competition = competition_id.get();
        let season = season_id.get();
        async move {
            if competition.is_empty() || season.is_empty() {
                return Ok::<StandingsResponse, ApiError>(StandingsResponse {
                    competition_id: None,
                    season_id: None,
                    table: Vec::new(),
                });
            }
            fetch_standings(&api, &competition, &season).await
        }
    });

    view! {
        <div class="standings-page">
            <h1>"Standings"</h1>
            <div class="standings-page__filters">
                <select
                    class="create-form__input"
                    on:change=move |ev| competition_id.set(event_target_value(&ev))
                >
                    <option value="">"Pick a competition"</option>
                    {move || {
                        competitions
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    class="create-form__input"
                    on:change=move |ev| season_id.set(event_target_value(&ev))
                >
                    <option value="">"Pick a season"</option>
                    {move || {
                        seasons
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|s| view! { <option value=s.id.clone()>{s.name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <Suspense fallback=move || view! { <p>"Loading table..."</p> }>
                {move || {
                    standings
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Team"</th>
                                                <th>"P"</th>
                                                <th>"W"</th>
                                                <th>"D"</th>
                                                <th>"L"</th>
                                                <th>"GF"</th>
                                                <th>"GA"</th>
                                                <th>"GD"</th>
                                                <th>"Pts"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {data
                                                .table
                                                .into_iter()
                                                .map(|row| {
                                                    view! {
                                                        <tr>
                                                            <td>{row.team_name}</td>
                                                            <td>{row.played}</td>
                                                            <td>{row.won}</td>
                                                            <td>{row.drawn}</td>
                                                            <td>{row.lost}</td>
                                                            <td>{row.goals_for}</td>
                                                            <td>{row.goals_against}</td>
                                                            <td>{row.goal_difference}</td>
                                                            <td>{row.points}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
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
