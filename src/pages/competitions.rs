//! Competition administration, admin-only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::{fetch_competitions, fetch_seasons};
use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin];

#[component]
pub fn CompetitionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let competitions = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_competitions(&api).await }
        }
    });
    let seasons = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_seasons(&api).await }
    });

    view! {
        <div class="competitions-page">
            <h1>"Competitions"</h1>
            <Suspense fallback=move || view! { <p>"Loading competitions..."</p> }>
                {move || {
                    competitions
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="competitions-page__list">
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                let kind = c.kind.unwrap_or_default();
                                                view! {
                                                    <li class="competitions-page__item">
                                                        {c.name} <span class="tag">{kind}</span>
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
            <h2>"Seasons"</h2>
            <Suspense fallback=move || view! { <p>"Loading seasons..."</p> }>
                {move || {
                    seasons
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="competitions-page__list">
                                        {list
                                            .into_iter()
                                            .map(|s| {
                                                let span = format!(
                                                    "{} to {}",
                                                    s.start_date.unwrap_or_default(),
                                                    s.end_date.unwrap_or_default(),
                                                );
                                                view! {
                                                    <li class="competitions-page__item">
                                                        {s.name} <span class="tag">{span}</span>
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
