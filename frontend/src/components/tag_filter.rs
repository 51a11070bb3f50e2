use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagFilterProps {
    /// Frequency-ranked tag names; an empty list renders nothing at
    /// all rather than an empty control.
    pub tags: Vec<String>,
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_select: Callback<Option<String>>,
}

#[function_component(TagFilter)]
pub fn tag_filter(props: &TagFilterProps) -> Html {
    if props.tags.is_empty() {
        return Html::default();
    }

    let clear_onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(None))
    };

    html! {
        <div class="tag-filter" role="group" aria-label="Filter by tag">
            <button
                type="button"
                class={classes!("tag-chip", props.selected.is_none().then_some("tag-chip-active"))}
                onclick={clear_onclick}
            >
                { "All" }
            </button>
            { for props.tags.iter().map(|tag| {
                let is_active = props.selected.as_deref() == Some(tag.as_str());
                let onclick = {
                    let on_select = props.on_select.clone();
                    let tag = tag.clone();
                    Callback::from(move |_| {
                        if is_active {
                            on_select.emit(None);
                        } else {
                            on_select.emit(Some(tag.clone()));
                        }
                    })
                };
                html! {
                    <button
                        type="button"
                        class={classes!("tag-chip", is_active.then_some("tag-chip-active"))}
                        {onclick}
                    >
                        { format!("#{}", tag) }
                    </button>
                }
            }) }
        </div>
    }
}
