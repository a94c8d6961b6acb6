//! App Configuration
//!
//! Fixed settings for the catalog browser, provided via context.

use log::LevelFilter;

/// Gutendex books endpoint
pub const API_URL: &str = "https://gutendex.com/books";

/// Page size the API uses for list responses
pub const BOOKS_PER_PAGE: u32 = 32;

/// Numbered buttons shown at once in the pagination bar
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Delay before a search keystroke triggers a fetch
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

pub const WISHLIST_KEY: &str = "gutendexWishlist";
pub const PREFERENCES_KEY: &str = "gutendexPreferences";

/// Topics offered in the genre select: (topic value, label)
pub const GENRES: &[(&str, &str)] = &[
    ("", "All Genres"),
    ("fiction", "Fiction"),
    ("adventure", "Adventure"),
    ("romance", "Romance"),
    ("mystery", "Mystery"),
    ("science fiction", "Science Fiction"),
    ("fantasy", "Fantasy"),
    ("horror", "Horror"),
    ("poetry", "Poetry"),
    ("drama", "Drama"),
    ("history", "History"),
    ("philosophy", "Philosophy"),
    ("children", "Children"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub page_size: u32,
    pub max_page_buttons: u32,
    pub search_debounce_ms: u32,
    pub wishlist_key: &'static str,
    pub preferences_key: &'static str,
    pub log_level: LevelFilter,
    pub genres: &'static [(&'static str, &'static str)],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            page_size: BOOKS_PER_PAGE,
            max_page_buttons: MAX_PAGE_BUTTONS,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            wishlist_key: WISHLIST_KEY,
            preferences_key: PREFERENCES_KEY,
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            genres: GENRES,
        }
    }
}
