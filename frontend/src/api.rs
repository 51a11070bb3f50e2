//! Fetch layer against the Hashnode GraphQL endpoint.
//!
//! Every public operation here soft-fails: transport errors, GraphQL
//! error lists and absent `data` all collapse into an empty/`None`
//! sentinel after a console log, so pages render their own empty
//! states instead of crashing.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_net::http::Request;
use inkstream_shared::paging::collect_all_pages;
use inkstream_shared::{wire, Post, PostsPage, Publication, Series, SeriesSummary};
use js_sys::Date;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use web_sys::console;

use crate::config::{
    AGGREGATE_PAGE_SIZE, HASHNODE_ENDPOINT, MAX_PAGE_REQUESTS, PUBLICATION_CACHE_SECS,
    PUBLICATION_HOST, SERIES_LIST_SIZE, SERIES_PAGE_SIZE,
};

const POSTS_QUERY: &str = r#"
  query GetPosts($host: String!, $first: Int!, $after: String) {
    publication(host: $host) {
      posts(first: $first, after: $after) {
        totalDocuments
        pageInfo {
          hasNextPage
          endCursor
        }
        edges {
          node {
            title
            slug
            brief
            publishedAt
            coverImage {
              url
            }
            author {
              name
              profilePicture
            }
            tags {
              name
            }
            readTimeInMinutes
            reactionCount
          }
        }
      }
    }
  }
"#;

const SINGLE_POST_QUERY: &str = r#"
  query GetPost($host: String!, $slug: String!) {
    publication(host: $host) {
      post(slug: $slug) {
        title
        slug
        brief
        publishedAt
        coverImage {
          url
        }
        author {
          name
          profilePicture
        }
        tags {
          name
        }
        content {
          html
          markdown
        }
        readTimeInMinutes
        reactionCount
      }
    }
  }
"#;

const PUBLICATION_QUERY: &str = r#"
  query GetPublication($host: String!) {
    publication(host: $host) {
      title
      about {
        text
      }
      favicon
      links {
        twitter
        github
        linkedin
        website
      }
      preferences {
        logo
        navbarItems {
          type
          label
          url
          series {
            slug
            name
          }
          page {
            slug
            title
          }
        }
      }
    }
  }
"#;

const SERIES_QUERY: &str = r#"
  query GetSeries($host: String!, $slug: String!, $first: Int!) {
    publication(host: $host) {
      series(slug: $slug) {
        name
        slug
        description {
          html
        }
        coverImage
        posts(first: $first) {
          totalDocuments
          pageInfo {
            hasNextPage
            endCursor
          }
          edges {
            node {
              title
              slug
              brief
              publishedAt
              coverImage {
                url
              }
              author {
                name
                profilePicture
              }
              tags {
                name
              }
              readTimeInMinutes
              reactionCount
            }
          }
        }
      }
    }
  }
"#;

const SERIES_LIST_QUERY: &str = r#"
  query GetSeriesList($host: String!, $first: Int!) {
    publication(host: $host) {
      seriesList(first: $first) {
        edges {
          node {
            name
            slug
            description {
              html
            }
            coverImage
            posts(first: 0) {
              totalDocuments
            }
          }
        }
      }
    }
  }
"#;

/// Per-call cache lifetime. The original deployment grew one fetch
/// function per cache setting; here it is a parameter instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Always hit the network, with cache-busting headers.
    Fresh,
    /// Serve a memoized response younger than the given seconds.
    Ttl(u32),
}

thread_local! {
    static RESPONSE_CACHE: RefCell<HashMap<String, (f64, String)>> =
        RefCell::new(HashMap::new());
}

fn cache_lookup(key: &str) -> Option<String> {
    RESPONSE_CACHE.with(|cache| {
        let cache = cache.borrow();
        let (expires_at, body) = cache.get(key)?;
        (Date::now() < *expires_at).then(|| body.clone())
    })
}

fn cache_store(key: String, ttl_secs: u32, body: String) {
    let expires_at = Date::now() + f64::from(ttl_secs) * 1000.0;
    RESPONSE_CACHE.with(|cache| {
        cache.borrow_mut().insert(key, (expires_at, body));
    });
}

fn log_failure(query_name: &str, detail: &str) {
    console::error_1(
        &format!("[hashnode] {query_name} failed for host {PUBLICATION_HOST}: {detail}").into(),
    );
}

fn log_absent_publication(query_name: &str) {
    console::error_1(
        &format!(
            "[hashnode] {query_name}: publication not found for host {PUBLICATION_HOST}"
        )
        .into(),
    );
}

/// One request/response round trip for a given query template.
async fn execute<T: DeserializeOwned>(
    query_name: &str,
    query: &str,
    variables: Value,
    cache: CachePolicy,
) -> Result<T, String> {
    let cache_key = format!("{query_name}:{variables}");
    if matches!(cache, CachePolicy::Ttl(_)) {
        if let Some(body) = cache_lookup(&cache_key) {
            return wire::decode(&body).map_err(|e| e.to_string());
        }
    }

    let url = match cache {
        CachePolicy::Fresh => format!("{}?_ts={}", HASHNODE_ENDPOINT, Date::now() as u64),
        CachePolicy::Ttl(_) => HASHNODE_ENDPOINT.to_string(),
    };
    let mut builder = Request::post(&url).header("Content-Type", "application/json");
    if matches!(cache, CachePolicy::Fresh) {
        builder = builder
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache");
    }

    let response = builder
        .json(&json!({ "query": query, "variables": variables }))
        .map_err(|e| format!("Request build error: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e:?}"))?;

    if !response.ok() {
        return Err(wire::RemoteError::Status(response.status()).to_string());
    }

    let body = response.text().await.map_err(|e| format!("Read error: {e:?}"))?;
    match wire::decode::<T>(&body) {
        Ok(data) => {
            if let CachePolicy::Ttl(secs) = cache {
                cache_store(cache_key, secs, body);
            }
            Ok(data)
        },
        Err(err) => Err(err.to_string()),
    }
}

/// Fetch exactly one page of posts. `None` covers every failure mode;
/// an empty page with `has_next_page == false` is a legitimate result.
pub async fn fetch_posts_page(first: usize, after: Option<String>) -> Option<PostsPage> {
    let variables = json!({ "host": PUBLICATION_HOST, "first": first, "after": after });
    match execute::<wire::PostsData>("posts-list", POSTS_QUERY, variables, CachePolicy::Fresh)
        .await
    {
        Ok(data) => match data.publication {
            Some(publication) => Some(publication.posts.into_page()),
            None => {
                log_absent_publication("posts-list");
                None
            },
        },
        Err(detail) => {
            log_failure("posts-list", &detail);
            None
        },
    }
}

/// Follow cursors until the whole collection is assembled, most recent
/// first. Degrades to whatever accumulated when a page fails mid-loop.
pub async fn fetch_all_posts() -> Vec<Post> {
    let collected = collect_all_pages(MAX_PAGE_REQUESTS, |cursor| {
        fetch_posts_page(AGGREGATE_PAGE_SIZE, cursor)
    })
    .await;
    if collected.truncated {
        console::warn_1(
            &format!(
                "[hashnode] posts-list: stopped after {} page requests, upstream kept reporting more",
                collected.pages_fetched
            )
            .into(),
        );
    }
    collected.posts
}

/// Fetch one post by slug. `None` means failure *or* an unknown slug;
/// the unknown-slug case arrives as a well-formed response and is not
/// logged as an error.
pub async fn fetch_post(slug: &str) -> Option<Post> {
    let variables = json!({ "host": PUBLICATION_HOST, "slug": slug });
    match execute::<wire::SinglePostData>(
        "single-post",
        SINGLE_POST_QUERY,
        variables,
        CachePolicy::Fresh,
    )
    .await
    {
        Ok(data) => match data.publication {
            Some(publication) => publication.post.and_then(wire::PostNode::into_post),
            None => {
                log_absent_publication("single-post");
                None
            },
        },
        Err(detail) => {
            log_failure("single-post", &detail);
            None
        },
    }
}

/// Fetch site-level metadata. Served from a short-lived cache since
/// several components (header, footer, hero) ask for it per render.
pub async fn fetch_publication() -> Option<Publication> {
    let variables = json!({ "host": PUBLICATION_HOST });
    match execute::<wire::PublicationData>(
        "publication",
        PUBLICATION_QUERY,
        variables,
        CachePolicy::Ttl(PUBLICATION_CACHE_SECS),
    )
    .await
    {
        Ok(data) => match data.publication {
            Some(publication) => Some(publication.into_publication()),
            None => {
                log_absent_publication("publication");
                None
            },
        },
        Err(detail) => {
            log_failure("publication", &detail);
            None
        },
    }
}

/// Fetch one series with its first page of posts.
pub async fn fetch_series(slug: &str) -> Option<Series> {
    let variables =
        json!({ "host": PUBLICATION_HOST, "slug": slug, "first": SERIES_PAGE_SIZE });
    match execute::<wire::SeriesData>("series", SERIES_QUERY, variables, CachePolicy::Fresh).await
    {
        Ok(data) => match data.publication {
            Some(publication) => publication.series.and_then(wire::SeriesNode::into_series),
            None => {
                log_absent_publication("series");
                None
            },
        },
        Err(detail) => {
            log_failure("series", &detail);
            None
        },
    }
}

/// Fetch the series index.
pub async fn fetch_series_list() -> Vec<SeriesSummary> {
    let variables = json!({ "host": PUBLICATION_HOST, "first": SERIES_LIST_SIZE });
    match execute::<wire::SeriesListData>(
        "series-list",
        SERIES_LIST_QUERY,
        variables,
        CachePolicy::Ttl(PUBLICATION_CACHE_SECS),
    )
    .await
    {
        Ok(data) => match data.publication {
            Some(publication) => publication.series_list.into_summaries(),
            None => {
                log_absent_publication("series-list");
                Vec::new()
            },
        },
        Err(detail) => {
            log_failure("series-list", &detail);
            Vec::new()
        },
    }
}
