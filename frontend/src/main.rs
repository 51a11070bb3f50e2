mod api;
mod components;
mod config;
pub mod hooks;
mod pages;
mod router;
mod storage;
mod theme;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <theme::ThemeProvider>
            <router::AppRouter />
        </theme::ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
