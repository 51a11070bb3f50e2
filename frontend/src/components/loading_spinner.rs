use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Large)]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let size_class = match props.size {
        SpinnerSize::Small => "spinner-small",
        SpinnerSize::Large => "spinner-large",
    };
    html! {
        <div class={classes!("loading-spinner", size_class)} role="status">
            <span class="spinner-ring" aria-hidden="true"></span>
            <span class="sr-only">{ "Loading…" }</span>
        </div>
    }
}
