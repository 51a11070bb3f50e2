use inkstream_shared::SeriesSummary;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        cms_html::CmsHtml,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    router::Route,
};

#[function_component(SeriesIndexPage)]
pub fn series_index_page() -> Html {
    let series = use_state(Vec::<SeriesSummary>::new);
    let loading = use_state(|| true);

    {
        let series = series.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                series.set(api::fetch_series_list().await);
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <main class="main series-index-page">
            <div class="container">
                <p class="page-kicker">{ "Collections" }</p>
                <h1 class="page-title">{ "Series" }</h1>

                {
                    if *loading {
                        html! {
                            <div class="page-loading">
                                <LoadingSpinner size={SpinnerSize::Large} />
                            </div>
                        }
                    } else if series.is_empty() {
                        html! { <p class="empty-state">{ "No series yet." }</p> }
                    } else {
                        html! {
                            <div class="series-grid">
                                { for series.iter().map(|summary| html! {
                                    <article class="series-card">
                                        {
                                            if let Some(cover) = summary.cover_image.as_ref() {
                                                html! {
                                                    <img
                                                        class="series-cover"
                                                        src={cover.clone()}
                                                        alt={summary.name.clone()}
                                                        loading="lazy"
                                                    />
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <h2 class="series-name">
                                            <Link<Route>
                                                to={Route::SeriesDetail { slug: summary.slug.clone() }}
                                            >
                                                { &summary.name }
                                            </Link<Route>>
                                        </h2>
                                        <CmsHtml
                                            markup={summary.description_html.clone()}
                                            class={classes!("series-description")}
                                        />
                                        <p class="series-count">
                                            { format!("{} articles", summary.post_count) }
                                        </p>
                                    </article>
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        </main>
    }
}
