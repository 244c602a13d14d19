//! Target of the guard's role-mismatch redirect.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Access denied"</h1>
            <p class="unauthorized-page__message">
                "You do not have permission to view this page."
            </p>
            <A href="/" attr:class="btn btn--primary">
                "Go back home"
            </A>
        </div>
    }
}
