//! Subscription plans: list + create.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::fetch_subscription_plans;
use crate::net::http::ApiClient;
use crate::net::types::{Role, SubscriptionPlanRequest};
use crate::state::session::SessionState;
use crate::util::guard::install_guard;

const REQUIRED: &[Role] = &[Role::Admin, Role::Manager];

/// Build the create payload with the fixed defaults the form does not
/// expose (currency, grace period).
fn build_plan_request(name: &str, amount: &str) -> Result<SubscriptionPlanRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a plan name.");
    }
    let amount = amount.trim();
    if amount.is_empty() || amount.parse::<f64>().is_err() {
        return Err("Enter a numeric amount.");
    }
    Ok(SubscriptionPlanRequest {
        name: name.to_owned(),
        kind: "Club membership".to_owned(),
        amount: amount.to_owned(),
        currency: "USD".to_owned(),
        billing_period: "MONTHLY".to_owned(),
        grace_days: 7,
        active: true,
    })
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    install_guard(session, REQUIRED, use_navigate());

    let plans = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_subscription_plans(&api).await }
        }
    });

    let name = RwSignal::new(String::new());
    let amount = RwSignal::new("0".to_owned());
    let error = RwSignal::new(None::<String>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match build_plan_request(&name.get(), &amount.get()) {
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
                match crate::net::api::create_subscription_plan(&api, &request).await {
                    Ok(_) => {
                        name.set(String::new());
                        amount.set("0".to_owned());
                        plans.refetch();
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
        <div class="subscriptions-page">
            <h1>"Subscriptions"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="create-form" on:submit=on_create>
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Plan name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Create Plan"
                </button>
            </form>
            <Suspense fallback=move || view! { <p>"Loading plans..."</p> }>
                {move || {
                    plans
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Plan"</th>
                                                <th>"Type"</th>
                                                <th>"Amount"</th>
                                                <th>"Billing"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|plan| {
                                                    let amount = format!(
                                                        "{} {}",
                                                        plan.amount.unwrap_or_default(),
                                                        plan.currency.unwrap_or_default(),
                                                    );
                                                    view! {
                                                        <tr>
                                                            <td>{plan.name}</td>
                                                            <td>{plan.kind.unwrap_or_default()}</td>
                                                            <td>{amount}</td>
                                                            <td>{plan.billing_period.unwrap_or_default()}</td>
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
