//! List Planning
//!
//! Decides what a list view needs from the API before anything is fetched,
//! and what to tell the user when a list comes back empty.

use crate::api::ListQuery;
use crate::route::Route;

pub const EMPTY_WISHLIST_MESSAGE: &str =
    "Your wishlist is empty. Add some books by clicking the heart icon.";
pub const NO_WISHLIST_MATCHES_MESSAGE: &str = "No wishlist books match your current filters.";
pub const NO_RESULTS_MESSAGE: &str = "No books found matching your search.";

/// Which list a page of results belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Catalog,
    Wishlist,
}

impl ListView {
    pub fn for_route(route: &Route) -> Option<ListView> {
        match route {
            Route::Home => Some(ListView::Catalog),
            Route::Wishlist => Some(ListView::Wishlist),
            Route::Detail(_) => None,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ListView::Catalog => NO_RESULTS_MESSAGE,
            ListView::Wishlist => NO_WISHLIST_MATCHES_MESSAGE,
        }
    }
}

/// Current search inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPlan {
    Fetch(ListQuery),
    /// Wishlist view with nothing saved: skip the request
    EmptyWishlist,
}

pub fn plan_list(view: ListView, filters: &Filters, wishlist_ids: Vec<String>, page: u32) -> ListPlan {
    let ids = match view {
        ListView::Catalog => Vec::new(),
        ListView::Wishlist if wishlist_ids.is_empty() => return ListPlan::EmptyWishlist,
        ListView::Wishlist => wishlist_ids,
    };

    ListPlan::Fetch(ListQuery {
        search: filters.search.clone(),
        genre: filters.genre.clone(),
        ids,
        page: page.max(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::API_URL;

    #[test]
    fn test_catalog_search_request() {
        let filters = Filters { search: "alice".into(), genre: String::new() };
        let ListPlan::Fetch(query) = plan_list(ListView::Catalog, &filters, vec!["84".into()], 1) else {
            panic!("catalog always fetches");
        };
        assert!(query.ids.is_empty());
        assert_eq!(query.to_url(API_URL), "https://gutendex.com/books?search=alice");
    }

    #[test]
    fn test_empty_wishlist_skips_fetch() {
        let plan = plan_list(ListView::Wishlist, &Filters::default(), Vec::new(), 1);
        assert_eq!(plan, ListPlan::EmptyWishlist);
    }

    #[test]
    fn test_wishlist_keeps_ids_and_filters() {
        let filters = Filters { search: String::new(), genre: "fiction".into() };
        let plan = plan_list(ListView::Wishlist, &filters, vec!["11".into(), "84".into()], 2);
        let ListPlan::Fetch(query) = plan else {
            panic!("expected fetch");
        };
        assert_eq!(query.to_url(API_URL), "https://gutendex.com/books?page=2&ids=11,84&topic=fiction");
    }

    #[test]
    fn test_list_view_for_route() {
        assert_eq!(ListView::for_route(&Route::Home), Some(ListView::Catalog));
        assert_eq!(ListView::for_route(&Route::Wishlist), Some(ListView::Wishlist));
        assert_eq!(ListView::for_route(&Route::Detail("84".into())), None);
        assert_eq!(ListView::Wishlist.empty_message(), NO_WISHLIST_MATCHES_MESSAGE);
    }
}
