use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="main not-found-page">
            <div class="container">
                <section class="not-found">
                    <p class="page-kicker">{ "404" }</p>
                    <h1>{ "Page not found" }</h1>
                    <p>{ "The page you are looking for does not exist." }</p>
                    <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                        { "Back to the homepage" }
                    </Link<Route>>
                </section>
            </div>
        </main>
    }
}
