use inkstream_shared::{content, Post};
use yew::prelude::*;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        tag_filter::TagFilter,
    },
    config::{POSTS_PER_PAGE, TOP_TAGS_LIMIT},
    hooks::use_pagination,
};

#[function_component(PostsPage)]
pub fn posts_page() -> Html {
    let posts = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let selected_tag = use_state(|| Option::<String>::None);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                posts.set(api::fetch_all_posts().await);
                loading.set(false);
            });
            || ()
        });
    }

    let tags = content::top_tags(&posts, TOP_TAGS_LIMIT);

    let filtered: Vec<Post> = match selected_tag.as_ref() {
        Some(tag) => {
            (*posts).iter().filter(|post| post.tags.iter().any(|t| t == tag)).cloned().collect()
        },
        None => (*posts).clone(),
    };

    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(filtered.clone(), POSTS_PER_PAGE);

    let on_select_tag = {
        let selected_tag = selected_tag.clone();
        Callback::from(move |tag: Option<String>| selected_tag.set(tag))
    };

    let empty_message = match selected_tag.as_ref() {
        Some(tag) => format!("No posts tagged #{tag} yet."),
        None => "No posts published yet.".to_string(),
    };

    html! {
        <main class="main posts-page">
            <div class="container">
                <p class="page-kicker">{ "Archive" }</p>
                <h1 class="page-title">{ "All posts" }</h1>

                <TagFilter
                    tags={tags}
                    selected={(*selected_tag).clone()}
                    on_select={on_select_tag}
                />

                {
                    if *loading {
                        html! {
                            <div class="page-loading">
                                <LoadingSpinner size={SpinnerSize::Large} />
                            </div>
                        }
                    } else if visible.is_empty() {
                        html! { <p class="empty-state">{ empty_message }</p> }
                    } else {
                        html! {
                            <>
                                <div class="article-grid">
                                    { for visible.iter().map(|post| html! {
                                        <ArticleCard post={post.clone()} />
                                    }) }
                                </div>
                                <Pagination
                                    current_page={current_page}
                                    total_pages={total_pages}
                                    on_page_change={go_to_page}
                                />
                            </>
                        }
                    }
                }
            </div>
        </main>
    }
}
