use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/posts")]
    Posts,

    #[at("/posts/:slug")]
    PostDetail { slug: String },

    #[at("/series")]
    SeriesIndex,

    #[at("/series/:slug")]
    SeriesDetail { slug: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Posts => html! { <pages::posts::PostsPage /> },
        Route::PostDetail {
            slug,
        } => {
            html! { <pages::post_detail::PostDetailPage slug={slug} /> }
        },
        Route::SeriesIndex => html! { <pages::series_index::SeriesIndexPage /> },
        Route::SeriesDetail {
            slug,
        } => {
            html! { <pages::series_detail::SeriesDetailPage slug={slug} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Header />
                <div class="app-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
