use yew::prelude::*;

use crate::hooks::use_interactions;

#[derive(Properties, PartialEq)]
pub struct InteractionButtonsProps {
    pub slug: String,
    /// Upstream reaction total, shown next to the local like state.
    #[prop_or_default]
    pub reaction_count: u32,
}

#[function_component(InteractionButtons)]
pub fn interaction_buttons(props: &InteractionButtonsProps) -> Html {
    let interactions = use_interactions(props.slug.clone());

    let like_onclick = {
        let toggle = interactions.toggle_like.clone();
        Callback::from(move |_| toggle.emit(()))
    };
    let bookmark_onclick = {
        let toggle = interactions.toggle_bookmark.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let like_icon = if interactions.liked { "fas" } else { "far" };
    let bookmark_icon = if interactions.bookmarked { "fas" } else { "far" };
    let shown_reactions = props.reaction_count + u32::from(interactions.liked);

    html! {
        <div class="interaction-buttons">
            <button
                type="button"
                class={classes!("interaction-btn", interactions.liked.then_some("is-active"))}
                aria-pressed={interactions.liked.to_string()}
                onclick={like_onclick}
            >
                <i class={classes!(like_icon, "fa-heart")} aria-hidden="true"></i>
                <span>{ shown_reactions }</span>
            </button>
            <button
                type="button"
                class={classes!("interaction-btn", interactions.bookmarked.then_some("is-active"))}
                aria-pressed={interactions.bookmarked.to_string()}
                onclick={bookmark_onclick}
            >
                <i class={classes!(bookmark_icon, "fa-bookmark")} aria-hidden="true"></i>
            </button>
        </div>
    }
}
