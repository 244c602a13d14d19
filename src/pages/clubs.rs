//! Club management: list + create.

#[cfg(test)]
#[path = "clubs_test.rs"]
mod clubs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::fetch_clubs;
use crate::net::http::ApiClient;
use crate::net::types::{ClubRequest, Role};
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin, Role::Manager];

/// Build the create payload; the city is optional, the name is not.
fn build_club_request(name: &str, city: &str) -> Result<ClubRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a club name.");
    }
    let city = city.trim();
    Ok(ClubRequest {
        name: name.to_owned(),
        city: (!city.is_empty()).then(|| city.to_owned()),
    })
}

#[component]
pub fn ClubsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let clubs = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_clubs(&api).await }
        }
    });

    let name = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match build_club_request(&name.get(), &city.get()) {
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
                match crate::net::api::create_club(&api, &request).await {
                    Ok(_) => {
                        name.set(String::new());
                        city.set(String::new());
                        clubs.refetch();
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
        <div class="clubs-page">
            <h1>"Clubs"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="create-form" on:submit=on_create>
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Club name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="City"
                    prop:value=move || city.get()
                    on:input=move |ev| city.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Save"
                </button>
            </form>
            <Suspense fallback=move || view! { <p>"Loading clubs..."</p> }>
                {move || {
                    clubs
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|club| {
                                                let city = club
                                                    .city
                                                    .unwrap_or_else(|| "No city provided".to_owned());
                                                view! {
                                                    <div class="card">
                                                        <h3>{club.name}</h3>
                                                        <p class="card__subtitle">{city}</p>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
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
