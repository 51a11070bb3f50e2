use inkstream_shared::{PostsPage, Publication};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        newsletter_cta::NewsletterCta,
    },
    router::Route,
};

const HERO_POSTS: usize = 6;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let publication = use_state(|| Option::<Publication>::None);
    let recent = use_state(|| Option::<PostsPage>::None);
    let loading = use_state(|| true);

    {
        let publication = publication.clone();
        let recent = recent.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            // Publication metadata and the recent page are independent;
            // fan them out instead of serializing the round trips.
            wasm_bindgen_futures::spawn_local(async move {
                let (publication_info, first_page) =
                    futures::join!(api::fetch_publication(), api::fetch_posts_page(HERO_POSTS, None));
                publication.set(publication_info);
                recent.set(first_page);
                loading.set(false);
            });
            || ()
        });
    }

    let hero_title = publication
        .as_ref()
        .map(|p| p.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Inkstream".to_string());
    let hero_about = publication.as_ref().map(|p| p.about.clone()).unwrap_or_default();
    let total = recent.as_ref().map(|page| page.total).unwrap_or(0);

    html! {
        <main class="main home-page">
            <div class="container">
                <section class="hero">
                    <h1 class="hero-title">{ hero_title }</h1>
                    {
                        if hero_about.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="hero-about">{ hero_about }</p> }
                        }
                    }
                    {
                        if total > 0 {
                            html! {
                                <p class="hero-stats">{ format!("{total} articles and counting") }</p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section class="recent-posts">
                    <div class="section-heading">
                        <h2>{ "Latest writing" }</h2>
                        <Link<Route> to={Route::Posts} classes={classes!("see-all-link")}>
                            { "All posts" }
                        </Link<Route>>
                    </div>
                    {
                        if *loading {
                            html! {
                                <div class="page-loading">
                                    <LoadingSpinner size={SpinnerSize::Large} />
                                </div>
                            }
                        } else {
                            match recent.as_ref() {
                                Some(page) if !page.posts.is_empty() => html! {
                                    <div class="article-grid">
                                        { for page.posts.iter().map(|post| html! {
                                            <ArticleCard post={post.clone()} />
                                        }) }
                                    </div>
                                },
                                _ => html! {
                                    <p class="empty-state">{ "No posts published yet." }</p>
                                },
                            }
                        }
                    }
                </section>

                <NewsletterCta />
            </div>
        </main>
    }
}
