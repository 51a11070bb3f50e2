/// Configuration for the frontend application

/// Hashnode GraphQL endpoint - overridable at compile time
pub const HASHNODE_ENDPOINT: &str = match option_env!("INKSTREAM_HASHNODE_ENDPOINT") {
    Some(url) => url,
    None => "https://gql.hashnode.com",
};

/// Publication host identifier sent as the `host` query variable
pub const PUBLICATION_HOST: &str = match option_env!("INKSTREAM_PUBLICATION_HOST") {
    Some(host) => host,
    None => "blog.inkstream.dev",
};

/// Page size used while aggregating the full post collection
pub const AGGREGATE_PAGE_SIZE: usize = 50;

/// Page size for the nested post list of one series
pub const SERIES_PAGE_SIZE: usize = 20;

/// How many entries the series index asks for
pub const SERIES_LIST_SIZE: usize = 10;

/// Hard bound on cursor-follow requests per aggregation
pub const MAX_PAGE_REQUESTS: usize = inkstream_shared::paging::DEFAULT_MAX_PAGES;

/// How many distinct tags the filter UI shows
pub const TOP_TAGS_LIMIT: usize = 12;

/// Articles per page in the archive view
pub const POSTS_PER_PAGE: usize = 9;

/// Publication metadata barely changes; cache it briefly
pub const PUBLICATION_CACHE_SECS: u32 = 300;
