//! Wire-level types for the Hashnode GraphQL API.
//!
//! The upstream endpoint answers every POST with a `{data, errors}`
//! envelope. [`decode`] picks exactly one canonical shape: a single
//! `data` nesting, errors win over partial data, and a 2xx body whose
//! `data` is null is its own failure case rather than something to
//! guess around.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    Author, NavLink, PageInfo, Post, PostContent, PostsPage, Publication, Series, SeriesSummary,
    SocialLinks,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
    /// Path segments are strings for fields and integers for list
    /// indices, so they stay as raw JSON values.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl GraphQlError {
    fn render(&self) -> String {
        if self.path.is_empty() {
            return self.message.clone();
        }
        let path = self
            .path
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        format!("{} (at {path})", self.message)
    }
}

fn render_errors(errors: &[GraphQlError]) -> String {
    errors.iter().map(GraphQlError::render).collect::<Vec<_>>().join("; ")
}

/// Failure taxonomy for one round trip against the content API.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("upstream reported GraphQL errors: {}", render_errors(.0))]
    Graphql(Vec<GraphQlError>),
    /// 2xx with no `errors` but a null `data` object. Logged loudly by
    /// callers; the single-nested envelope is the only shape we accept.
    #[error("response carried no data object")]
    MissingData,
    #[error("malformed response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// Decode a raw response body into the expected `data` payload.
///
/// A non-empty `errors` list discards any partial `data` rather than
/// half-trusting it.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RemoteError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))?;
    if !envelope.errors.is_empty() {
        return Err(RemoteError::Graphql(envelope.errors));
    }
    envelope.data.ok_or(RemoteError::MissingData)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|t| t.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// posts-list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PostsData {
    pub publication: Option<PublicationPosts>,
}

#[derive(Debug, Deserialize)]
pub struct PublicationPosts {
    pub posts: PostConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConnection {
    #[serde(default)]
    pub total_documents: usize,
    pub page_info: PageInfoNode,
    #[serde(default)]
    pub edges: Vec<PostEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoNode {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostEdge {
    pub node: Option<PostNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostNode {
    pub slug: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
    pub published_at: Option<String>,
    pub cover_image: Option<CoverImageNode>,
    pub author: Option<AuthorNode>,
    #[serde(default)]
    pub tags: Option<Vec<TagNode>>,
    pub content: Option<ContentNode>,
    pub read_time_in_minutes: Option<u32>,
    pub reaction_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CoverImageNode {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorNode {
    pub name: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagNode {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentNode {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub markdown: String,
}

impl PostNode {
    /// Normalize into a domain [`Post`]. Entries without a slug or a
    /// parseable `publishedAt` are dropped here, before any sorting.
    pub fn into_post(self) -> Option<Post> {
        let slug = self.slug.filter(|s| !s.is_empty())?;
        let published_at = self.published_at.as_deref().and_then(parse_timestamp)?;
        let author = self
            .author
            .map(|a| Author {
                name: a.name.unwrap_or_default(),
                profile_picture: a.profile_picture,
            })
            .unwrap_or(Author { name: String::new(), profile_picture: None });
        Some(Post {
            slug,
            title: self.title.unwrap_or_default(),
            brief: self.brief.unwrap_or_default(),
            published_at,
            cover_image: self.cover_image.and_then(|c| c.url),
            author,
            tags: self
                .tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|t| t.name)
                .collect(),
            content: self.content.map(|c| PostContent { html: c.html, markdown: c.markdown }),
            read_time_minutes: self.read_time_in_minutes,
            reaction_count: self.reaction_count.unwrap_or(0),
        })
    }
}

impl PostConnection {
    pub fn into_page(self) -> PostsPage {
        PostsPage {
            posts: self
                .edges
                .into_iter()
                .filter_map(|edge| edge.node)
                .filter_map(PostNode::into_post)
                .collect(),
            page_info: PageInfo {
                has_next_page: self.page_info.has_next_page,
                end_cursor: self.page_info.end_cursor,
            },
            total: self.total_documents,
        }
    }
}

// ---------------------------------------------------------------------------
// single-post
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SinglePostData {
    pub publication: Option<PublicationPost>,
}

#[derive(Debug, Deserialize)]
pub struct PublicationPost {
    pub post: Option<PostNode>,
}

// ---------------------------------------------------------------------------
// publication
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PublicationData {
    pub publication: Option<PublicationNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationNode {
    pub title: Option<String>,
    pub about: Option<TextNode>,
    pub favicon: Option<String>,
    pub links: Option<LinksNode>,
    pub preferences: Option<PreferencesNode>,
}

#[derive(Debug, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LinksNode {
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesNode {
    pub logo: Option<String>,
    #[serde(default)]
    pub navbar_items: Option<Vec<NavbarItemNode>>,
}

#[derive(Debug, Deserialize)]
pub struct NavbarItemNode {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub label: Option<String>,
    pub url: Option<String>,
    pub series: Option<SeriesRefNode>,
    pub page: Option<PageRefNode>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesRefNode {
    pub slug: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageRefNode {
    pub slug: Option<String>,
    pub title: Option<String>,
}

impl NavbarItemNode {
    /// Map one configured navbar entry; items missing their target are
    /// skipped rather than rendered as dead links.
    fn into_nav_link(self) -> Option<NavLink> {
        let kind = self.kind.unwrap_or_default().to_ascii_lowercase();
        match kind.as_str() {
            "series" => {
                let series = self.series?;
                let slug = series.slug.filter(|s| !s.is_empty())?;
                let label = self.label.or(series.name).unwrap_or_else(|| slug.clone());
                Some(NavLink::Series { label, slug })
            },
            "page" => {
                let page = self.page?;
                let slug = page.slug.filter(|s| !s.is_empty())?;
                let label = self.label.or(page.title).unwrap_or_else(|| slug.clone());
                Some(NavLink::Page { label, slug })
            },
            "link" => {
                let url = self.url.filter(|u| !u.is_empty())?;
                let label = self.label.unwrap_or_else(|| url.clone());
                Some(NavLink::Url { label, url })
            },
            _ => None,
        }
    }
}

impl PublicationNode {
    pub fn into_publication(self) -> Publication {
        let (logo, nav) = match self.preferences {
            Some(preferences) => (
                preferences.logo,
                preferences
                    .navbar_items
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(NavbarItemNode::into_nav_link)
                    .collect(),
            ),
            None => (None, Vec::new()),
        };
        Publication {
            title: self.title.unwrap_or_default(),
            about: self.about.map(|a| a.text).unwrap_or_default(),
            favicon: self.favicon,
            logo,
            links: self
                .links
                .map(|l| SocialLinks {
                    twitter: l.twitter,
                    github: l.github,
                    linkedin: l.linkedin,
                    website: l.website,
                })
                .unwrap_or_default(),
            nav,
        }
    }
}

// ---------------------------------------------------------------------------
// series / series-list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SeriesData {
    pub publication: Option<PublicationSeries>,
}

#[derive(Debug, Deserialize)]
pub struct PublicationSeries {
    pub series: Option<SeriesNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesNode {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<HtmlNode>,
    pub cover_image: Option<String>,
    pub posts: Option<PostConnection>,
}

#[derive(Debug, Deserialize)]
pub struct HtmlNode {
    #[serde(default)]
    pub html: String,
}

impl SeriesNode {
    pub fn into_series(self) -> Option<Series> {
        let slug = self.slug.filter(|s| !s.is_empty())?;
        Some(Series {
            name: self.name.unwrap_or_default(),
            slug,
            description_html: self.description.map(|d| d.html).unwrap_or_default(),
            cover_image: self.cover_image,
            posts: self.posts.map(PostConnection::into_page).unwrap_or(PostsPage {
                posts: Vec::new(),
                page_info: PageInfo { has_next_page: false, end_cursor: None },
                total: 0,
            }),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SeriesListData {
    pub publication: Option<PublicationSeriesList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationSeriesList {
    pub series_list: SeriesConnection,
}

#[derive(Debug, Deserialize)]
pub struct SeriesConnection {
    #[serde(default)]
    pub edges: Vec<SeriesEdge>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesEdge {
    pub node: Option<SeriesListNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesListNode {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<HtmlNode>,
    pub cover_image: Option<String>,
    pub posts: Option<TotalNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalNode {
    #[serde(default)]
    pub total_documents: usize,
}

impl SeriesListNode {
    pub fn into_summary(self) -> Option<SeriesSummary> {
        let slug = self.slug.filter(|s| !s.is_empty())?;
        Some(SeriesSummary {
            name: self.name.unwrap_or_default(),
            slug,
            description_html: self.description.map(|d| d.html).unwrap_or_default(),
            cover_image: self.cover_image,
            post_count: self.posts.map(|p| p.total_documents).unwrap_or(0),
        })
    }
}

impl SeriesConnection {
    pub fn into_summaries(self) -> Vec<SeriesSummary> {
        self.edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .filter_map(SeriesListNode::into_summary)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS_BODY: &str = r#"{
        "data": {
            "publication": {
                "posts": {
                    "totalDocuments": 3,
                    "pageInfo": {"hasNextPage": true, "endCursor": "abc"},
                    "edges": [
                        {"node": {
                            "slug": "first",
                            "title": "First",
                            "brief": "short",
                            "publishedAt": "2025-05-01T10:00:00Z",
                            "coverImage": {"url": "https://cdn/img.png"},
                            "author": {"name": "Ana", "profilePicture": null},
                            "tags": [{"name": "rust"}, {"name": "wasm"}],
                            "readTimeInMinutes": 4,
                            "reactionCount": 7
                        }},
                        {"node": {
                            "slug": "undated",
                            "title": "No timestamp",
                            "publishedAt": null
                        }},
                        {"node": null}
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn posts_page_drops_undated_and_null_nodes() {
        let data: PostsData = decode(POSTS_BODY).expect("decode");
        let page = data.publication.expect("publication").posts.into_page();
        assert_eq!(page.total, 3);
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].slug, "first");
        assert_eq!(page.posts[0].tags, vec!["rust", "wasm"]);
        assert_eq!(page.posts[0].read_time_minutes, Some(4));
        assert_eq!(page.posts[0].reaction_count, 7);
        assert!(page.page_info.has_next_page);
        assert_eq!(page.page_info.end_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn graphql_errors_discard_partial_data() {
        let body = r#"{
            "data": {"publication": null},
            "errors": [{"message": "rate limited", "path": ["publication", 0]}]
        }"#;
        let err = decode::<PostsData>(body).expect_err("errors must win");
        match err {
            RemoteError::Graphql(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].render().contains("rate limited"));
                assert!(errors[0].render().contains("publication.0"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_data_is_missing_data() {
        let err = decode::<PostsData>(r#"{"data": null}"#).expect_err("null data");
        assert!(matches!(err, RemoteError::MissingData));
    }

    #[test]
    fn absent_publication_is_distinct_from_failure() {
        let data: PostsData = decode(r#"{"data": {"publication": null}}"#).expect("decode");
        assert!(data.publication.is_none());
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = decode::<PostsData>("not-json").expect_err("garbage");
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[test]
    fn missing_post_surfaces_as_none() {
        let body = r#"{"data": {"publication": {"post": null}}}"#;
        let data: SinglePostData = decode(body).expect("decode");
        assert!(data.publication.expect("publication").post.is_none());
    }

    #[test]
    fn navbar_items_map_by_kind_and_skip_incomplete() {
        let body = r#"{
            "data": {
                "publication": {
                    "title": "Inkstream",
                    "about": {"text": "notes on systems"},
                    "favicon": null,
                    "links": {"github": "https://github.com/inkstream"},
                    "preferences": {
                        "logo": null,
                        "navbarItems": [
                            {"type": "series", "label": "Deep Dives", "series": {"slug": "deep-dives", "name": null}},
                            {"type": "page", "label": null, "page": {"slug": "about", "title": "About"}},
                            {"type": "link", "label": "GitHub", "url": "https://github.com/inkstream"},
                            {"type": "series", "label": "Broken", "series": null},
                            {"type": "mystery", "label": "??"}
                        ]
                    }
                }
            }
        }"#;
        let data: PublicationData = decode(body).expect("decode");
        let publication = data.publication.expect("publication").into_publication();
        assert_eq!(publication.title, "Inkstream");
        assert_eq!(publication.about, "notes on systems");
        assert_eq!(publication.links.github.as_deref(), Some("https://github.com/inkstream"));
        assert_eq!(
            publication.nav,
            vec![
                NavLink::Series { label: "Deep Dives".into(), slug: "deep-dives".into() },
                NavLink::Page { label: "About".into(), slug: "about".into() },
                NavLink::Url {
                    label: "GitHub".into(),
                    url: "https://github.com/inkstream".into()
                },
            ]
        );
    }

    #[test]
    fn series_list_keeps_counts() {
        let body = r#"{
            "data": {
                "publication": {
                    "seriesList": {
                        "edges": [
                            {"node": {
                                "name": "Rust Internals",
                                "slug": "rust-internals",
                                "description": {"html": "<p>guts</p>"},
                                "coverImage": null,
                                "posts": {"totalDocuments": 9}
                            }},
                            {"node": {"name": "No slug", "slug": null}}
                        ]
                    }
                }
            }
        }"#;
        let data: SeriesListData = decode(body).expect("decode");
        let summaries =
            data.publication.expect("publication").series_list.into_summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].slug, "rust-internals");
        assert_eq!(summaries[0].post_count, 9);
    }
}
