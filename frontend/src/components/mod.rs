// Reusable components live here.

pub mod article_card;
pub mod cms_html;
pub mod footer;
pub mod header;
pub mod interaction_buttons;
pub mod loading_spinner;
pub mod newsletter_cta;
pub mod pagination;
pub mod tag_filter;
pub mod theme_toggle;
