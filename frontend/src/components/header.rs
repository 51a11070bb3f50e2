use inkstream_shared::{NavLink, Publication};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{api, components::theme_toggle::ThemeToggle, router::Route};

fn nav_entry(link: &NavLink) -> Html {
    match link {
        NavLink::Series {
            label,
            slug,
        } => {
            html! {
                <Link<Route>
                    to={Route::SeriesDetail { slug: slug.clone() }}
                    classes={classes!("nav-link")}
                >
                    { label }
                </Link<Route>>
            }
        },
        // Static CMS pages are not routed locally; link out to them.
        NavLink::Page {
            label,
            slug,
        } => {
            html! {
                <a class="nav-link" href={format!("/pages/{slug}")}>{ label }</a>
            }
        },
        NavLink::Url {
            label,
            url,
        } => {
            html! {
                <a class="nav-link" href={url.clone()} target="_blank" rel="noopener">
                    { label }
                </a>
            }
        },
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let publication = use_state(|| Option::<Publication>::None);

    {
        let publication = publication.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                publication.set(api::fetch_publication().await);
            });
            || ()
        });
    }

    let title = publication
        .as_ref()
        .map(|p| p.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Inkstream".to_string());

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes={classes!("site-title")}>
                    {
                        if let Some(logo) = publication.as_ref().and_then(|p| p.logo.clone()) {
                            html! { <img src={logo} alt={title.clone()} class="site-logo" /> }
                        } else {
                            html! { <span>{ title.clone() }</span> }
                        }
                    }
                </Link<Route>>
                <nav class="site-nav" aria-label="Main">
                    <Link<Route> to={Route::Posts} classes={classes!("nav-link")}>
                        { "Posts" }
                    </Link<Route>>
                    <Link<Route> to={Route::SeriesIndex} classes={classes!("nav-link")}>
                        { "Series" }
                    </Link<Route>>
                    {
                        publication
                            .as_ref()
                            .map(|p| p.nav.iter().map(nav_entry).collect::<Html>())
                            .unwrap_or_default()
                    }
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}
