pub mod home;
pub mod not_found;
pub mod post_detail;
pub mod posts;
pub mod series_detail;
pub mod series_index;
