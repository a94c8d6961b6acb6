//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::BooksApi;
use crate::browse::Filters;
use crate::config::AppConfig;
use crate::preferences::PreferencesStore;
use crate::route::Route;
use crate::storage::BrowserStorage;
use crate::wishlist::WishlistStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    api: StoredValue<BooksApi>,
    /// Wishlist ids; a signal so the nav badge follows toggles
    wishlist: RwSignal<WishlistStore<BrowserStorage>>,
    preferences: StoredValue<PreferencesStore<BrowserStorage>>,
    /// Current hash route
    pub route: ReadSignal<Route>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        wishlist: WishlistStore<BrowserStorage>,
        preferences: PreferencesStore<BrowserStorage>,
        route: ReadSignal<Route>,
    ) -> Self {
        let api = BooksApi::new(config.api_url.clone());
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            wishlist: RwSignal::new(wishlist),
            preferences: StoredValue::new(preferences),
            route,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> BooksApi {
        self.api.get_value()
    }

    pub fn is_wishlisted_untracked(&self, id: &str) -> bool {
        self.wishlist.with_untracked(|w| w.is_member(id))
    }

    /// Number of saved ids (tracked)
    pub fn wishlist_len(&self) -> usize {
        self.wishlist.with(|w| w.len())
    }

    pub fn wishlist_ids(&self) -> Vec<String> {
        self.wishlist.with_untracked(|w| w.list_ids())
    }

    /// Toggle membership and persist; returns the new membership
    pub fn toggle_wishlist(&self, id: &str) -> bool {
        let now_member = self.wishlist.try_update(|w| w.toggle(id)).unwrap_or(false);
        log::debug!("Wishlist {} {}", if now_member { "added" } else { "removed" }, id);
        now_member
    }

    pub fn save_preferences(&self, filters: &Filters) {
        self.preferences
            .update_value(|p| p.set(&filters.search, &filters.genre));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
