//! Browser localStorage boundary: liked/bookmarked slug lists and the
//! persisted theme choice. All reads treat corrupt or missing content
//! as empty; concurrent tabs are last-write-wins.

use inkstream_shared::content::{parse_slug_list, toggle_slug};
use web_sys::Storage;

pub const LIKES_KEY: &str = "user_likes";
pub const BOOKMARKS_KEY: &str = "user_bookmarks";
pub const THEME_KEY: &str = "theme";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// Read a persisted slug list; corruption parses as the empty list.
pub fn read_slugs(key: &str) -> Vec<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .map(|raw| parse_slug_list(&raw))
        .unwrap_or_default()
}

/// Flip membership of `slug` under `key` and persist the whole list.
/// Returns whether the slug is now present.
pub fn toggle_stored_slug(key: &str, slug: &str) -> bool {
    let (list, present) = toggle_slug(read_slugs(key), slug);
    if let (Some(storage), Ok(serialized)) = (local_storage(), serde_json::to_string(&list)) {
        let _ = storage.set_item(key, &serialized);
    }
    present
}

pub fn read_theme() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
}

pub fn store_theme(value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, value);
    }
}
