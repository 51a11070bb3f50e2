use yew::prelude::*;

use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_theme();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| theme.toggle())
    };

    let label = if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" };
    let icon_class = if theme.is_dark() { "fa-sun" } else { "fa-moon" };

    html! {
        <button
            type="button"
            class={classes!("theme-toggle", props.class.clone())}
            aria-label={label}
            title={label}
            {onclick}
        >
            <i class={classes!("fas", icon_class)} aria-hidden="true"></i>
        </button>
    }
}
