//! Domain models and content logic shared by the Inkstream frontend.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! cursor aggregation loop, the wire decoding and the content utilities
//! can be unit-tested off the wasm target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod content;
pub mod paging;
pub mod wire;

// One published article, fully normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub brief: String,
    /// Required for inclusion; entries the upstream returns without a
    /// usable timestamp are dropped during normalization.
    pub published_at: DateTime<Utc>,
    pub cover_image: Option<String>,
    pub author: Author,
    /// Tag names in upstream order. Uniqueness is not enforced at the
    /// source; consumers de-duplicate via [`content::top_tags`].
    pub tags: Vec<String>,
    pub content: Option<PostContent>,
    /// Upstream reading-time hint in minutes, when present.
    pub read_time_minutes: Option<u32>,
    pub reaction_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub profile_picture: Option<String>,
}

// Post body as delivered by the CMS; either rendition may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    pub html: String,
    pub markdown: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

// Outcome of one paged fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub page_info: PageInfo,
    /// Authoritative count reported by the upstream source; may exceed
    /// `posts.len()`.
    pub total: usize,
}

// Navigation entry from the publication's configured navbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavLink {
    Series { label: String, slug: String },
    Page { label: String, slug: String },
    Url { label: String, url: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

// Read-mostly snapshot of site-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub about: String,
    pub favicon: Option<String>,
    pub logo: Option<String>,
    pub links: SocialLinks,
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub slug: String,
    pub description_html: String,
    pub cover_image: Option<String>,
    pub posts: PostsPage,
}

// Series index entry (no nested posts, just the count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub name: String,
    pub slug: String,
    pub description_html: String,
    pub cover_image: Option<String>,
    pub post_count: usize,
}
