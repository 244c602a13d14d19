//! Single post view, routed as `/posts/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::fetch_post;
use crate::net::http::ApiClient;

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();

    let post = LocalResource::new(move || {
        let api = api.clone();
        let id = params.read().get("id").unwrap_or_default();
        async move { fetch_post(&api, &id).await }
    });

    view! {
        <div class="post-detail-page">
            <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|result| match result {
                            Ok(post) => {
                                let byline = post.author_name.unwrap_or_default();
                                let date = post.created_at.unwrap_or_default();
                                view! {
                                    <article class="post-detail">
                                        <h1>{post.title}</h1>
                                        <p class="post-detail__meta">{format!("{byline} {date}")}</p>
                                        <div class="post-detail__body">{post.content}</div>
                                    </article>
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
