//! Pure content utilities: tag ranking, reading time, pagination
//! windows and the slug-list halves of the likes/bookmarks store.

use std::collections::HashMap;

use crate::Post;

/// Assumed reading speed for the estimator.
pub const WORDS_PER_MINUTE: usize = 200;

/// Remove complete `<...>` spans without interpreting entities. An
/// unterminated `<` run and empty `<>` pairs stay in the text as-is.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('>') {
            Some(end) if end > 1 => rest = &tail[end + 1..],
            Some(_) => {
                out.push_str("<>");
                rest = &tail[2..];
            },
            None => {
                out.push_str(tail);
                rest = "";
            },
        }
    }
    out.push_str(rest);
    out
}

/// Estimate minutes-to-read for raw HTML content.
///
/// Markup is stripped, the remaining text is split on whitespace and
/// the word count is converted at [`WORDS_PER_MINUTE`] with a fixed
/// one-minute buffer for images and code blocks. Empty input floors at
/// one minute.
pub fn reading_time_minutes(html: &str) -> u32 {
    let text = strip_tags(html);
    let words = text.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE) + 1) as u32
}

/// Distinct tag names ranked by occurrence count, ties broken by
/// first-seen order, truncated to `limit`. A tag-less corpus yields an
/// empty vec and the UI hides the filter entirely.
pub fn top_tags(posts: &[Post], limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for post in posts {
        for tag in &post.tags {
            if !counts.contains_key(tag.as_str()) {
                first_seen.push(tag.as_str());
            }
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    // Stable sort over first-seen order keeps ties deterministic.
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen.truncate(limit);
    first_seen.into_iter().map(str::to_string).collect()
}

/// One slot in the numbered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Windowed page list with ellipsis slots, 1-based.
pub fn page_numbers(current: usize, total: usize, max_visible: usize) -> Vec<PageSlot> {
    let max_visible = max_visible.max(3);
    if total <= max_visible {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let half = max_visible / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut slots = Vec::new();
    if start > 1 {
        slots.push(PageSlot::Page(1));
        if start > 2 {
            slots.push(PageSlot::Ellipsis);
        }
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total {
        if end < total - 1 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total));
    }
    slots
}

/// Parse a persisted slug list; any corruption reads as empty rather
/// than surfacing an error.
pub fn parse_slug_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Flip membership of `slug`. Returns the updated list and whether the
/// slug is now present.
pub fn toggle_slug(mut list: Vec<String>, slug: &str) -> (Vec<String>, bool) {
    if let Some(pos) = list.iter().position(|s| s == slug) {
        list.remove(pos);
        (list, false)
    } else {
        list.push(slug.to_string());
        (list, true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{Author, Post};

    fn tagged(slug: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            brief: String::new(),
            published_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("ts"),
            cover_image: None,
            author: Author { name: String::new(), profile_picture: None },
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: None,
            read_time_minutes: None,
            reaction_count: 0,
        }
    }

    #[test]
    fn strip_tags_removes_markup_only() {
        assert_eq!(strip_tags("<p>word word</p>"), "word word");
        assert_eq!(strip_tags("a <b>bold</b> move"), "a bold move");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn strip_tags_keeps_unterminated_runs() {
        assert_eq!(strip_tags("2 < 3 still text"), "2 < 3 still text");
        assert_eq!(strip_tags("tail <unclosed"), "tail <unclosed");
    }

    #[test]
    fn reading_time_floors_at_one_minute() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("   "), 1);
    }

    #[test]
    fn reading_time_adds_fixed_buffer() {
        let two_hundred_words = vec!["word"; 200].join(" ");
        assert_eq!(reading_time_minutes(&two_hundred_words), 2);
        let two_hundred_one = vec!["word"; 201].join(" ");
        assert_eq!(reading_time_minutes(&two_hundred_one), 3);
    }

    #[test]
    fn reading_time_ignores_markup_tokens() {
        assert_eq!(reading_time_minutes("<p>word word</p>"), 2);
    }

    #[test]
    fn top_tags_rank_by_count_then_first_seen() {
        let posts = vec![
            tagged("one", &["a", "b"]),
            tagged("two", &["a"]),
            tagged("three", &["c", "a"]),
        ];
        assert_eq!(top_tags(&posts, 12), vec!["a", "b", "c"]);
    }

    #[test]
    fn top_tags_truncate_and_handle_empty_corpus() {
        let posts = vec![tagged("one", &["a", "b", "c"]), tagged("two", &["b"])];
        assert_eq!(top_tags(&posts, 2), vec!["b", "a"]);
        assert!(top_tags(&[], 12).is_empty());
        assert!(top_tags(&[tagged("bare", &[])], 12).is_empty());
    }

    #[test]
    fn page_numbers_short_lists_have_no_ellipsis() {
        assert_eq!(
            page_numbers(2, 3, 5),
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]
        );
    }

    #[test]
    fn page_numbers_window_around_current() {
        assert_eq!(
            page_numbers(6, 12, 5),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Page(6),
                PageSlot::Page(7),
                PageSlot::Page(8),
                PageSlot::Ellipsis,
                PageSlot::Page(12),
            ]
        );
        assert_eq!(
            page_numbers(1, 12, 5),
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Ellipsis,
                PageSlot::Page(12),
            ]
        );
    }

    #[test]
    fn corrupt_slug_list_reads_as_empty_and_rewrites_cleanly() {
        assert!(parse_slug_list("not-json").is_empty());
        assert!(parse_slug_list("").is_empty());
        assert!(parse_slug_list("{\"a\": 1}").is_empty());

        let (list, present) = toggle_slug(parse_slug_list("not-json"), "intro-to-wasm");
        assert!(present);
        assert_eq!(list, vec!["intro-to-wasm"]);
        let serialized = serde_json::to_string(&list).expect("serialize");
        assert_eq!(parse_slug_list(&serialized), list);
    }

    #[test]
    fn toggle_removes_existing_slug() {
        let (list, present) = toggle_slug(vec!["a".into(), "b".into()], "a");
        assert!(!present);
        assert_eq!(list, vec!["b"]);
    }
}
