//! Gutendex Browser App
//!
//! Root component: builds the stores, installs the hash router and loads
//! whatever the current route asks for.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{BookDetails, BookGrid, NavBar, PaginationBar, SearchBar, StatusBanner};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pagination::Pagination;
use crate::preferences::PreferencesStore;
use crate::route::{use_hash_route, Route};
use crate::storage::BrowserStorage;
use crate::store::AppState;
use crate::wishlist::WishlistStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let wishlist = WishlistStore::load(BrowserStorage, config.wishlist_key);
    let preferences = PreferencesStore::load(BrowserStorage, config.preferences_key);

    let mut state = AppState::new(preferences.get());
    state.pagination = Pagination::new(config.page_size, config.max_page_buttons);

    // Provide store to all children
    let store = Store::new(state);
    provide_context(store);

    let route = use_hash_route();
    let ctx = AppContext::new(config, wishlist, preferences, route);
    provide_context(ctx);

    // Load on every route change
    Effect::new(move |_| {
        let current = route.get();
        log::debug!("Loading route {:?}", current);
        actions::load_route(store, ctx, current);
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                <SearchBar />
                <StatusBanner />
                {move || match route.get() {
                    Route::Detail(_) => view! { <BookDetails /> }.into_any(),
                    Route::Home | Route::Wishlist => view! {
                        <BookGrid />
                        <PaginationBar />
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
