use inkstream_shared::Publication;
use yew::prelude::*;

use crate::api;

fn social_link(href: &Option<String>, icon: &'static str, label: &'static str) -> Html {
    match href {
        Some(url) if !url.is_empty() => html! {
            <a
                class="social-link"
                href={url.clone()}
                target="_blank"
                rel="noopener"
                aria-label={label}
            >
                <i class={classes!("fab", icon)} aria-hidden="true"></i>
            </a>
        },
        _ => html! {},
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    // Served from the publication cache; the header already warmed it.
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

    let about = publication
        .as_ref()
        .map(|p| p.about.clone())
        .filter(|text| !text.is_empty());

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                {
                    if let Some(about) = about {
                        html! { <p class="footer-about">{ about }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="footer-social">
                    {
                        publication
                            .as_ref()
                            .map(|p| html! {
                                <>
                                    { social_link(&p.links.twitter, "fa-twitter", "Twitter") }
                                    { social_link(&p.links.github, "fa-github", "GitHub") }
                                    { social_link(&p.links.linkedin, "fa-linkedin", "LinkedIn") }
                                    { social_link(&p.links.website, "fa-chrome", "Website") }
                                </>
                            })
                            .unwrap_or_default()
                    }
                </div>
            </div>
        </footer>
    }
}
