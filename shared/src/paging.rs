//! Cursor-following aggregation over paged post fetches.

use std::future::Future;

use crate::Post;

/// Upper bound on page requests for one aggregation. A misbehaving
/// upstream that keeps answering `hasNextPage: true` must not turn the
/// loop into an infinite one.
pub const DEFAULT_MAX_PAGES: usize = 200;

/// Result of one full aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    /// All surviving posts, most recent first.
    pub posts: Vec<Post>,
    pub pages_fetched: usize,
    /// True when the loop stopped at the page bound instead of a
    /// terminal `hasNextPage: false`.
    pub truncated: bool,
}

/// Follow `endCursor` until the upstream reports no further page.
///
/// The loop is strictly sequential: each request needs the cursor from
/// the previous response. A `None` page (transport or protocol failure
/// already logged by the fetcher) stops the loop and keeps whatever has
/// accumulated, so callers degrade to partial results instead of
/// failing outright.
pub async fn collect_all_pages<F, Fut>(max_pages: usize, mut fetch_page: F) -> Collected
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Option<crate::PostsPage>>,
{
    let mut posts = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages_fetched = 0;
    let mut truncated = false;

    loop {
        if pages_fetched >= max_pages {
            truncated = true;
            break;
        }
        let Some(page) = fetch_page(cursor.take()).await else {
            break;
        };
        pages_fetched += 1;
        posts.extend(page.posts);
        if !page.page_info.has_next_page {
            break;
        }
        match page.page_info.end_cursor {
            Some(next) => cursor = Some(next),
            // More pages claimed but no cursor to reach them.
            None => break,
        }
    }

    sort_by_recency(&mut posts);
    Collected { posts, pages_fetched, truncated }
}

/// Sort most-recent-first. `sort_by` is stable, so posts sharing a
/// timestamp keep their relative order and repeated sorts of the same
/// input produce identical output.
pub fn sort_by_recency(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;

    use super::*;
    use crate::{Author, PageInfo, Post, PostsPage};

    fn post(slug: &str, day: u32) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            brief: String::new(),
            published_at: Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).single().expect("ts"),
            cover_image: None,
            author: Author { name: "Ana".into(), profile_picture: None },
            tags: Vec::new(),
            content: None,
            read_time_minutes: None,
            reaction_count: 0,
        }
    }

    fn page(posts: Vec<Post>, next: Option<&str>) -> PostsPage {
        PostsPage {
            posts,
            page_info: PageInfo {
                has_next_page: next.is_some(),
                end_cursor: next.map(str::to_string),
            },
            total: 0,
        }
    }

    fn run_script(
        max_pages: usize,
        script: Vec<Option<PostsPage>>,
    ) -> (Collected, usize, Vec<Option<String>>) {
        let script = RefCell::new(script);
        let calls = Cell::new(0);
        let cursors = RefCell::new(Vec::new());
        let collected = block_on(collect_all_pages(max_pages, |cursor| {
            calls.set(calls.get() + 1);
            cursors.borrow_mut().push(cursor.clone());
            let next = if script.borrow().is_empty() {
                None
            } else {
                script.borrow_mut().remove(0)
            };
            async move { next }
        }));
        (collected, calls.get(), cursors.into_inner())
    }

    #[test]
    fn single_terminal_page_needs_exactly_one_request() {
        let (collected, calls, cursors) =
            run_script(DEFAULT_MAX_PAGES, vec![Some(page(vec![post("a", 1)], None))]);
        assert_eq!(calls, 1);
        assert_eq!(cursors, vec![None]);
        assert_eq!(collected.pages_fetched, 1);
        assert!(!collected.truncated);
        assert_eq!(collected.posts.len(), 1);
    }

    #[test]
    fn follows_cursors_across_three_pages() {
        let script = vec![
            Some(page(vec![post("a", 1), post("b", 2)], Some("c1"))),
            Some(page(vec![post("c", 3)], Some("c2"))),
            Some(page(vec![post("d", 4)], None)),
        ];
        let (collected, calls, cursors) = run_script(DEFAULT_MAX_PAGES, script);
        assert_eq!(calls, 3);
        assert_eq!(cursors, vec![None, Some("c1".into()), Some("c2".into())]);
        assert_eq!(collected.pages_fetched, 3);
        assert_eq!(collected.posts.len(), 4);
        // Most recent first after the final sort.
        let slugs: Vec<&str> = collected.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn failed_page_keeps_partial_results() {
        let script = vec![Some(page(vec![post("a", 1)], Some("c1"))), None];
        let (collected, calls, _) = run_script(DEFAULT_MAX_PAGES, script);
        assert_eq!(calls, 2);
        assert_eq!(collected.pages_fetched, 1);
        assert!(!collected.truncated);
        assert_eq!(collected.posts.len(), 1);
    }

    #[test]
    fn endless_has_next_page_stops_at_the_bound() {
        let script: Vec<Option<PostsPage>> =
            (0..10).map(|i| Some(page(vec![post(&format!("p{i}"), 1)], Some("again")))).collect();
        let (collected, calls, _) = run_script(4, script);
        assert_eq!(calls, 4);
        assert_eq!(collected.pages_fetched, 4);
        assert!(collected.truncated);
        assert_eq!(collected.posts.len(), 4);
    }

    #[test]
    fn next_page_without_cursor_terminates() {
        let script = vec![Some(PostsPage {
            posts: vec![post("a", 1)],
            page_info: PageInfo { has_next_page: true, end_cursor: None },
            total: 1,
        })];
        let (collected, calls, _) = run_script(DEFAULT_MAX_PAGES, script);
        assert_eq!(calls, 1);
        assert_eq!(collected.posts.len(), 1);
    }

    #[test]
    fn recency_sort_is_stable_and_idempotent() {
        let mut posts =
            vec![post("newer", 9), post("tied-1", 5), post("tied-2", 5), post("older", 1)];
        sort_by_recency(&mut posts);
        let first_pass: Vec<String> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(first_pass, vec!["newer", "tied-1", "tied-2", "older"]);
        sort_by_recency(&mut posts);
        let second_pass: Vec<String> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(first_pass, second_pass);
    }
}
