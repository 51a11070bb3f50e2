use inkstream_shared::content::{page_numbers, PageSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
    #[prop_or(5)]
    pub max_visible: usize,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let slots = page_numbers(current_page, total_pages, props.max_visible);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button
                type="button"
                class="page-btn page-prev"
                disabled={current_page <= 1}
                onclick={prev_onclick}
            >
                { "‹" }
            </button>
            { for slots.iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let page = *page;
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };
                    let active = if page == current_page { Some("page-active") } else { None };
                    html! {
                        <button
                            type="button"
                            class={classes!("page-btn", active)}
                            aria-current={(page == current_page).then_some("page")}
                            {onclick}
                        >
                            { page }
                        </button>
                    }
                },
                PageSlot::Ellipsis => html! {
                    <span class="page-ellipsis" aria-hidden="true">{ "…" }</span>
                },
            }) }
            <button
                type="button"
                class="page-btn page-next"
                disabled={current_page >= total_pages}
                onclick={next_onclick}
            >
                { "›" }
            </button>
        </nav>
    }
}
