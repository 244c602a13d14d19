//! User account administration, admin-only.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::fetch_users;
use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin];

/// Comma-joined role tags for the table cell.
fn format_roles(roles: &[String]) -> String {
    roles.join(", ")
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let users = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_users(&api).await }
    });

    view! {
        <div class="users-page">
            <h1>"Users"</h1>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Roles"</th>
                                                <th>"Joined"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    let roles = format_roles(&user.roles);
                                                    view! {
                                                        <tr>
                                                            <td>{user.full_name}</td>
                                                            <td>{user.email}</td>
                                                            <td>{roles}</td>
                                                            <td>{user.created_at.unwrap_or_default()}</td>
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
