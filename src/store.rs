//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The transitions
//! themselves are plain `AppState` methods so they can be tested headless.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browse::{Filters, ListView, EMPTY_WISHLIST_MESSAGE};
use crate::error::FetchError;
use crate::models::{Book, BookPage};
use crate::pagination::Pagination;
use crate::preferences::Preferences;

/// What the status banner shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Nothing to show; message explains why
    Empty(String),
    Error(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Books on the current list page
    pub books: Vec<Book>,
    /// Book shown in the detail view
    pub detail: Option<Book>,
    pub pagination: Pagination,
    pub status: LoadStatus,
    pub filters: Filters,
}

impl AppState {
    /// Seed the filters from saved preferences
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            filters: Filters {
                search: preferences.search_term.clone(),
                genre: preferences.genre.clone(),
            },
            ..Default::default()
        }
    }

    pub fn begin_list_load(&mut self) {
        self.books.clear();
        self.detail = None;
        self.status = LoadStatus::Loading;
    }

    pub fn apply_page(&mut self, view: ListView, page: BookPage) {
        self.pagination.update(&page);
        self.books = page.results;
        if self.books.is_empty() {
            self.pagination.clear();
            self.status = LoadStatus::Empty(view.empty_message().to_string());
        } else {
            self.status = LoadStatus::Ready;
        }
    }

    pub fn apply_list_error(&mut self, err: &FetchError) {
        self.pagination.clear();
        self.status = LoadStatus::Error(format!("Error fetching books: {}", err));
    }

    pub fn show_empty_wishlist(&mut self) {
        self.books.clear();
        self.detail = None;
        self.pagination.clear();
        self.status = LoadStatus::Empty(EMPTY_WISHLIST_MESSAGE.to_string());
    }

    pub fn begin_detail_load(&mut self) {
        self.books.clear();
        self.detail = None;
        self.pagination.clear();
        self.status = LoadStatus::Loading;
    }

    pub fn apply_detail(&mut self, book: Book) {
        self.detail = Some(book);
        self.status = LoadStatus::Ready;
    }

    pub fn apply_detail_error(&mut self, err: &FetchError) {
        self.detail = None;
        self.status = LoadStatus::Error(format!(
            "Error fetching book details: {}. The book ID may be invalid.",
            err
        ));
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{NO_RESULTS_MESSAGE, NO_WISHLIST_MATCHES_MESSAGE};

    fn make_book(id: u32) -> Book {
        serde_json::from_value(serde_json::json!({ "id": id, "title": format!("Book {}", id) })).unwrap()
    }

    fn page(count: u64, next: Option<&str>, ids: &[u32]) -> BookPage {
        BookPage {
            count,
            next: next.map(str::to_string),
            previous: None,
            results: ids.iter().copied().map(make_book).collect(),
        }
    }

    #[test]
    fn test_new_seeds_filters_from_preferences() {
        let prefs = Preferences { search_term: "alice".into(), genre: "fiction".into() };
        let state = AppState::new(&prefs);
        assert_eq!(state.filters.search, "alice");
        assert_eq!(state.filters.genre, "fiction");
        assert_eq!(state.status, LoadStatus::Idle);
    }

    #[test]
    fn test_apply_page_updates_pagination() {
        let mut state = AppState::default();
        state.begin_list_load();
        assert_eq!(state.status, LoadStatus::Loading);

        state.apply_page(ListView::Catalog, page(100, Some("https://gutendex.com/books/?page=2"), &[1, 2]));
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.books.len(), 2);
        assert_eq!(state.pagination.total_pages(), 4);
        assert!(state.pagination.is_visible());
    }

    #[test]
    fn test_empty_results_message_depends_on_view() {
        let mut state = AppState::default();
        state.apply_page(ListView::Catalog, page(0, None, &[]));
        assert_eq!(state.status, LoadStatus::Empty(NO_RESULTS_MESSAGE.into()));

        state.apply_page(ListView::Wishlist, page(0, None, &[]));
        assert_eq!(state.status, LoadStatus::Empty(NO_WISHLIST_MATCHES_MESSAGE.into()));
        assert!(!state.pagination.is_visible());
    }

    #[test]
    fn test_empty_wishlist_hides_pagination() {
        let mut state = AppState::default();
        state.apply_page(ListView::Catalog, page(100, Some("https://gutendex.com/books/?page=2"), &[1]));

        state.show_empty_wishlist();
        assert_eq!(state.status, LoadStatus::Empty(EMPTY_WISHLIST_MESSAGE.into()));
        assert!(state.books.is_empty());
        assert!(!state.pagination.is_visible());
    }

    #[test]
    fn test_list_error_is_reported_inline() {
        let mut state = AppState::default();
        state.apply_page(ListView::Catalog, page(100, Some("https://gutendex.com/books/?page=2"), &[1]));
        state.apply_list_error(&FetchError::status(500));
        assert_eq!(state.status, LoadStatus::Error("Error fetching books: HTTP error! Status: 500".into()));
        assert!(!state.pagination.is_visible());
    }

    #[test]
    fn test_detail_error_mentions_invalid_id() {
        let mut state = AppState::default();
        state.begin_detail_load();
        state.apply_detail_error(&FetchError::status(404));
        assert_eq!(
            state.status,
            LoadStatus::Error(
                "Error fetching book details: HTTP error! Status: 404. The book ID may be invalid.".into()
            )
        );
    }

    #[test]
    fn test_detail_load_hides_pagination() {
        let mut state = AppState::default();
        state.apply_page(ListView::Catalog, page(100, Some("https://gutendex.com/books/?page=2"), &[1]));
        state.begin_detail_load();
        assert!(!state.pagination.is_visible());
        state.apply_detail(make_book(84));
        assert_eq!(state.detail.as_ref().map(|b| b.id), Some(84));
        assert_eq!(state.status, LoadStatus::Ready);
    }
}
