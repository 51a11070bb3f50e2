use inkstream_shared::Post;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        cms_html::CmsHtml,
        interaction_buttons::InteractionButtons,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    router::Route,
    utils,
};

#[derive(Properties, Clone, PartialEq)]
pub struct PostDetailProps {
    pub slug: String,
}

#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailProps) -> Html {
    let post = use_state(|| Option::<Post>::None);
    let loading = use_state(|| true);

    {
        let post = post.clone();
        let loading = loading.clone();
        use_effect_with(props.slug.clone(), move |slug: &String| {
            loading.set(true);
            let slug = slug.clone();
            wasm_bindgen_futures::spawn_local(async move {
                post.set(api::fetch_post(&slug).await);
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <main class="main post-detail-page">
                <div class="page-loading">
                    <LoadingSpinner size={SpinnerSize::Large} />
                </div>
            </main>
        };
    }

    let Some(post) = post.as_ref() else {
        // Unknown slug is its own state, not a crash screen.
        return html! {
            <main class="main post-detail-page">
                <div class="container">
                    <section class="not-found">
                        <h1>{ "Post not found" }</h1>
                        <p>{ "This article may have been unpublished or moved." }</p>
                        <Link<Route> to={Route::Posts} classes={classes!("back-link")}>
                            { "Browse all posts" }
                        </Link<Route>>
                    </section>
                </div>
            </main>
        };
    };

    let body = utils::post_body_html(post);

    html! {
        <main class="main post-detail-page">
            <div class="container">
                <article class="post">
                    <header class="post-header">
                        <h1 class="post-title">{ &post.title }</h1>
                        <div class="post-meta">
                            <span class="post-meta-item">
                                {
                                    if let Some(avatar) = post.author.profile_picture.as_ref() {
                                        html! {
                                            <img
                                                class="author-avatar"
                                                src={avatar.clone()}
                                                alt={post.author.name.clone()}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                { &post.author.name }
                            </span>
                            <span class="post-meta-item">
                                { utils::format_date(&post.published_at) }
                            </span>
                            <span class="post-meta-item">{ utils::read_time_label(post) }</span>
                        </div>
                        {
                            if let Some(cover) = post.cover_image.as_ref() {
                                html! {
                                    <img
                                        class="post-cover"
                                        src={cover.clone()}
                                        alt={post.title.clone()}
                                    />
                                }
                            } else {
                                html! {}
                            }
                        }
                    </header>

                    <CmsHtml markup={body} class={classes!("post-body")} />

                    <footer class="post-footer">
                        <ul class="post-tags">
                            { for post.tags.iter().map(|tag| html! {
                                <li><span class="tag-pill">{ format!("#{}", tag) }</span></li>
                            }) }
                        </ul>
                        <InteractionButtons
                            slug={post.slug.clone()}
                            reaction_count={post.reaction_count}
                        />
                    </footer>
                </article>
            </div>
        </main>
    }
}
