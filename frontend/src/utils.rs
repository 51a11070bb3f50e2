use chrono::{DateTime, Utc};
use inkstream_shared::{content, Post};
use pulldown_cmark::{html, Options, Parser};

/// Human-readable publication date, e.g. "June 14, 2025".
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Convert Markdown content into HTML with common extensions enabled.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Body HTML for one post: the CMS-rendered HTML when present,
/// otherwise the markdown rendition converted locally.
pub fn post_body_html(post: &Post) -> String {
    match &post.content {
        Some(content) if !content.html.trim().is_empty() => content.html.clone(),
        Some(content) => markdown_to_html(&content.markdown),
        None => String::new(),
    }
}

/// Minutes-to-read label, preferring the upstream hint over the local
/// word-count estimate.
pub fn read_time_label(post: &Post) -> String {
    let minutes = post.read_time_minutes.unwrap_or_else(|| {
        let body = post
            .content
            .as_ref()
            .map(|c| c.html.as_str())
            .filter(|html| !html.is_empty())
            .unwrap_or(post.brief.as_str());
        content::reading_time_minutes(body)
    });
    format!("{minutes} min read")
}
