//! Public fixture list.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use leptos::prelude::*;

use crate::net::api::fetch_fixtures;
use crate::net::http::ApiClient;
use crate::net::types::Fixture;

/// Scoreline for display: dashes until a score exists.
fn format_score(fixture: &Fixture) -> String {
    match (fixture.home_score, fixture.away_score) {
        (Some(home), Some(away)) => format!("{home} : {away}"),
        _ => "- : -".to_owned(),
    }
}

fn format_pairing(fixture: &Fixture) -> String {
    let home = fixture.home_team_name.as_deref().unwrap_or("TBD");
    let away = fixture.away_team_name.as_deref().unwrap_or("TBD");
    format!("{home} vs {away}")
}

#[component]
pub fn FixturesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let fixtures = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_fixtures(&api).await }
    });

    view! {
        <div class="fixtures-page">
            <h1>"Fixtures"</h1>
            <Suspense fallback=move || view! { <p>"Loading fixtures..."</p> }>
                {move || {
                    fixtures
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Match"</th>
                                                <th>"Competition"</th>
                                                <th>"Venue"</th>
                                                <th>"Kickoff"</th>
                                                <th>"Score"</th>
                                                <th>"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|fixture| {
                                                    let pairing = format_pairing(&fixture);
                                                    let score = format_score(&fixture);
                                                    view! {
                                                        <tr>
                                                            <td>{pairing}</td>
                                                            <td>{fixture.competition_name.unwrap_or_default()}</td>
                                                            <td>{fixture.venue.unwrap_or_default()}</td>
                                                            <td>{fixture.match_date.unwrap_or_default()}</td>
                                                            <td>{score}</td>
                                                            <td>{fixture.status.unwrap_or_default()}</td>
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
