use yew::prelude::*;

use crate::config::PUBLICATION_HOST;

/// Newsletter call-to-action. Subscription itself is handled by the
/// CMS-hosted form; this only links out.
#[function_component(NewsletterCta)]
pub fn newsletter_cta() -> Html {
    let subscribe_url = format!("https://{PUBLICATION_HOST}/newsletter");

    html! {
        <section class="newsletter-cta">
            <h2 class="newsletter-title">{ "Stay in the loop" }</h2>
            <p class="newsletter-text">
                { "New posts land in your inbox, nothing else does." }
            </p>
            <a class="newsletter-button" href={subscribe_url} target="_blank" rel="noopener">
                { "Subscribe" }
            </a>
        </section>
    }
}
