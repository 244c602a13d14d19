//! Team management: list + create (team belongs to a club).

#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::{fetch_clubs, fetch_teams};
use crate::net::http::ApiClient;
use crate::net::types::{Role, TeamRequest};
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin, Role::Manager, Role::Coach];

/// Build the create payload; name and club are mandatory.
fn build_team_request(
    name: &str,
    club_id: &str,
    coach_name: &str,
) -> Result<TeamRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a team name.");
    }
    let club_id = club_id.trim();
    if club_id.is_empty() {
        return Err("Pick a club for the team.");
    }
    let coach_name = coach_name.trim();
    Ok(TeamRequest {
        name: name.to_owned(),
        club_id: club_id.to_owned(),
        coach_name: (!coach_name.is_empty()).then(|| coach_name.to_owned()),
        home_ground: None,
    })
}

#[component]
pub fn TeamsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let teams = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_teams(&api).await }
        }
    });
    let clubs = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_clubs(&api).await }
        }
    });

    let name = RwSignal::new(String::new());
    let club_id = RwSignal::new(String::new());
    let coach = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match build_team_request(&name.get(), &club_id.get(), &coach.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_team(&api, &request).await {
                    Ok(_) => {
                        name.set(String::new());
                        coach.set(String::new());
                        teams.refetch();
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, request);
        }
    };

    view! {
        <div class="teams-page">
            <h1>"Teams"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="create-form" on:submit=on_create>
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Team name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <select
                    class="create-form__input"
                    on:change=move |ev| club_id.set(event_target_value(&ev))
                >
                    <option value="">"Pick a club"</option>
                    {move || {
                        clubs
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|club| {
                                view! { <option value=club.id.clone()>{club.name.clone()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Coach name"
                    prop:value=move || coach.get()
                    on:input=move |ev| coach.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Save"
                </button>
            </form>
            <Suspense fallback=move || view! { <p>"Loading teams..."</p> }>
                {move || {
                    teams
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Team"</th>
                                                <th>"Club"</th>
                                                <th>"Coach"</th>
                                                <th>"Home ground"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|team| {
                                                    view! {
                                                        <tr>
                                                            <td>{team.name}</td>
                                                            <td>{team.club_name.unwrap_or_default()}</td>
                                                            <td>{team.coach_name.unwrap_or_default()}</td>
                                                            <td>{team.home_ground.unwrap_or_default()}</td>
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
