use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::storage::{self, BOOKMARKS_KEY, LIKES_KEY};

fn total_pages_for(len: usize, per_page: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.div_ceil(per_page)
    }
}

fn clamp_page(page: usize, total: usize) -> usize {
    if total == 0 {
        1
    } else {
        page.clamp(1, total)
    }
}

/// Paginate an already-fetched list inside a component. Returns the
/// visible slice, the current 1-based page, the page count and a
/// callback that jumps to a page (scrolling back to the top).
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = total_pages_for(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    // The list can shrink (e.g. a tag filter) and strand the cursor past
    // the end; snap it back.
    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let safe_page = clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let visible = {
        let page = clamp_page(*current_page, total_pages);
        let start = (page - 1) * per_page;
        items.iter().skip(start).take(per_page).cloned().collect::<Vec<_>>()
    };

    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let safe_page = clamp_page(page, total_pages);
            if safe_page != *current_page {
                current_page.set(safe_page);
                if let Some(win) = web_sys::window() {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(ScrollBehavior::Smooth);
                    win.scroll_to_with_scroll_to_options(&options);
                }
            }
        })
    };

    (visible, clamp_page(*current_page, total_pages), total_pages, go_to_page)
}

/// Like/bookmark state for one post, backed by localStorage.
#[derive(Clone, PartialEq)]
pub struct Interactions {
    pub liked: bool,
    pub bookmarked: bool,
    pub toggle_like: Callback<()>,
    pub toggle_bookmark: Callback<()>,
}

#[hook]
pub fn use_interactions(slug: String) -> Interactions {
    let liked = use_state(|| false);
    let bookmarked = use_state(|| false);

    {
        let liked = liked.clone();
        let bookmarked = bookmarked.clone();
        use_effect_with(slug.clone(), move |slug| {
            liked.set(storage::read_slugs(LIKES_KEY).iter().any(|s| s == slug));
            bookmarked.set(storage::read_slugs(BOOKMARKS_KEY).iter().any(|s| s == slug));
            || ()
        });
    }

    let toggle_like = {
        let liked = liked.clone();
        let slug = slug.clone();
        Callback::from(move |_| liked.set(storage::toggle_stored_slug(LIKES_KEY, &slug)))
    };

    let toggle_bookmark = {
        let bookmarked = bookmarked.clone();
        Callback::from(move |_| {
            bookmarked.set(storage::toggle_stored_slug(BOOKMARKS_KEY, &slug))
        })
    };

    Interactions {
        liked: *liked,
        bookmarked: *bookmarked,
        toggle_like,
        toggle_bookmark,
    }
}
