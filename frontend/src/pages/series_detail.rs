use inkstream_shared::Series;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        cms_html::CmsHtml,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct SeriesDetailProps {
    pub slug: String,
}

#[function_component(SeriesDetailPage)]
pub fn series_detail_page(props: &SeriesDetailProps) -> Html {
    let series = use_state(|| Option::<Series>::None);
    let loading = use_state(|| true);

    {
        let series = series.clone();
        let loading = loading.clone();
        use_effect_with(props.slug.clone(), move |slug: &String| {
            loading.set(true);
            let slug = slug.clone();
            wasm_bindgen_futures::spawn_local(async move {
                series.set(api::fetch_series(&slug).await);
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <main class="main series-detail-page">
                <div class="page-loading">
                    <LoadingSpinner size={SpinnerSize::Large} />
                </div>
            </main>
        };
    }

    let Some(series) = series.as_ref() else {
        return html! {
            <main class="main series-detail-page">
                <div class="container">
                    <section class="not-found">
                        <h1>{ "Series not found" }</h1>
                        <p>{ "There is no series under this name." }</p>
                        <Link<Route> to={Route::SeriesIndex} classes={classes!("back-link")}>
                            { "Browse all series" }
                        </Link<Route>>
                    </section>
                </div>
            </main>
        };
    };

    html! {
        <main class="main series-detail-page">
            <div class="container">
                <header class="series-header">
                    <p class="page-kicker">{ "Series" }</p>
                    <h1 class="page-title">{ &series.name }</h1>
                    {
                        if series.description_html.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <CmsHtml
                                    markup={series.description_html.clone()}
                                    class={classes!("series-description")}
                                />
                            }
                        }
                    }
                    <p class="series-count">
                        { format!("{} articles in this series", series.posts.total) }
                    </p>
                </header>

                {
                    if series.posts.posts.is_empty() {
                        html! { <p class="empty-state">{ "No articles in this series yet." }</p> }
                    } else {
                        html! {
                            <div class="article-grid">
                                { for series.posts.posts.iter().map(|post| html! {
                                    <ArticleCard post={post.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        </main>
    }
}
