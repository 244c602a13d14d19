//! Player roster, read-only for staff.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::fetch_players;
use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin, Role::Manager, Role::Coach];

#[component]
pub fn PlayersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let players = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_players(&api).await }
    });

    view! {
        <div class="players-page">
            <h1>"Players"</h1>
            <Suspense fallback=move || view! { <p>"Loading players..."</p> }>
                {move || {
                    players
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Team"</th>
                                                <th>"Position"</th>
                                                <th>"Jersey"</th>
                                                <th>"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|player| {
                                                    let jersey = player
                                                        .jersey_number
                                                        .map_or(String::new(), |n| n.to_string());
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                {format!(
                                                                    "{} {}",
                                                                    player.first_name,
                                                                    player.last_name,
                                                                )}
                                                            </td>
                                                            <td>{player.team_name.unwrap_or_default()}</td>
                                                            <td>{player.position.unwrap_or_default()}</td>
                                                            <td>{jersey}</td>
                                                            <td>{player.status.unwrap_or_default()}</td>
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
