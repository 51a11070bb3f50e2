//! Process-wide theme state: init from the persisted preference or the
//! system default, toggle flips the `dark` class on the document root
//! and persists. The storage boundary itself lives in `storage.rs`.

use yew::prelude::*;

use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    toggle: Callback<()>,
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle(&self) {
        self.toggle.emit(());
    }
}

fn initial_theme() -> Theme {
    if let Some(theme) = storage::read_theme().as_deref().and_then(Theme::parse) {
        return theme;
    }
    let prefers_dark = web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|media| media.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn apply_to_document(theme: Theme) {
    if let Some(root) =
        web_sys::window().and_then(|win| win.document()).and_then(|doc| doc.document_element())
    {
        let classes = root.class_list();
        match theme {
            Theme::Dark => {
                let _ = classes.add_1("dark");
            },
            Theme::Light => {
                let _ = classes.remove_1("dark");
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(initial_theme);

    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            apply_to_document(*theme);
            storage::store_theme(theme.as_str());
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.flipped()))
    };

    let handle = ThemeHandle { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<ThemeHandle>>
    }
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().expect("use_theme outside of ThemeProvider")
}
