use inkstream_shared::Post;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{router::Route, utils};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub post: Post,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let post = props.post.clone();
    let detail_route = Route::PostDetail {
        slug: post.slug.clone(),
    };

    html! {
        <article class="article-card">
            {
                if let Some(image) = post.cover_image.as_ref() {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("cover-image")}>
                            <img src={image.clone()} alt={post.title.clone()} loading="lazy" />
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <h3 class="article-title">
                <Link<Route> to={detail_route.clone()} classes={classes!("article-title-link")}>
                    { &post.title }
                </Link<Route>>
            </h3>
            <div class="post-meta">
                <span class="post-meta-item">
                    <i class="fas fa-user-circle" aria-hidden="true"></i>
                    { &post.author.name }
                </span>
                <span class="post-meta-item">
                    <i class="far fa-calendar-alt" aria-hidden="true"></i>
                    { utils::format_date(&post.published_at) }
                </span>
                <span class="post-meta-item">
                    <i class="far fa-clock" aria-hidden="true"></i>
                    { utils::read_time_label(&post) }
                </span>
            </div>
            <p class="article-excerpt">{ &post.brief }</p>
            <div class="post-footer">
                <ul class="post-tags">
                    { for post.tags.iter().map(|tag| {
                        html! {
                            <li>
                                <span class="tag-pill">{ format!("#{}", tag) }</span>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </article>
    }
}
