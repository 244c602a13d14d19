//! Public posts & announcements with keyword search.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::fetch_published_posts;
use crate::net::http::ApiClient;

/// Card preview: first `limit` chars of the body, on a char boundary.
fn excerpt(content: &str, limit: usize) -> String {
    if content.chars().count() <= limit {
        return content.to_owned();
    }
    let cut: String = content.chars().take(limit).collect();
    format!("{cut}...")
}

#[component]
pub fn PostsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let keyword = RwSignal::new(String::new());
    // Only re-queries on submit, not on every keystroke.
    let submitted = RwSignal::new(String::new());

    let posts = LocalResource::new(move || {
        let api = api.clone();
        let keyword = submitted.get();
        async move { fetch_published_posts(&api, &keyword).await }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(keyword.get());
    };

    view! {
        <div class="posts-page">
            <h1>"Posts & Announcements"</h1>
            <form class="posts-page__search" on:submit=on_search>
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Keyword"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">
                    "Search"
                </button>
            </form>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(page) => {
                                view! {
                                    <div class="card-grid">
                                        {page
                                            .content
                                            .into_iter()
                                            .map(|post| {
                                                let preview = excerpt(&post.content, 120);
                                                let href = format!("/posts/{}", post.id);
                                                view! {
                                                    <A href=href attr:class="card card--link">
                                                        <h3>{post.title}</h3>
                                                        <p class="card__subtitle">{preview}</p>
                                                    </A>
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
