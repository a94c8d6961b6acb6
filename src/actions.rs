//! Loaders
//!
//! Kick off API requests and write their outcome into the app store.
//! Results are applied in completion order; a slow response can overwrite
//! a newer one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browse::{plan_list, ListPlan, ListView};
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{AppStateStoreFields, AppStore};

/// Load `page` of the list for the current route (no-op on the detail view)
pub fn load_list(store: AppStore, ctx: AppContext, page: u32) {
    let Some(view) = ListView::for_route(&ctx.route.get_untracked()) else {
        return;
    };
    let filters = store.filters().get_untracked();

    match plan_list(view, &filters, ctx.wishlist_ids(), page) {
        ListPlan::EmptyWishlist => {
            log::info!("Wishlist is empty, nothing to load");
            store.update(|s| s.show_empty_wishlist());
        }
        ListPlan::Fetch(query) => {
            store.update(|s| s.begin_list_load());
            let api = ctx.api();
            spawn_local(async move {
                match api.fetch_list(&query).await {
                    Ok(result) => {
                        log::info!("Loaded {} of {} books (page {})", result.results.len(), result.count, query.page);
                        store.update(|s| s.apply_page(view, result));
                        store.pagination().with_untracked(|p| {
                            log::debug!("Now on page {} of {}", p.current_page(), p.total_pages())
                        });
                    }
                    Err(e) => {
                        log::warn!("Error fetching books: {}", e);
                        store.update(|s| s.apply_list_error(&e));
                    }
                }
            });
        }
    }
}

/// Follow a `next`/`previous` cursor
pub fn load_cursor(store: AppStore, ctx: AppContext, url: String) {
    let Some(view) = ListView::for_route(&ctx.route.get_untracked()) else {
        return;
    };
    store.update(|s| s.begin_list_load());
    let api = ctx.api();
    spawn_local(async move {
        match api.fetch_by_url(&url).await {
            Ok(result) => store.update(|s| s.apply_page(view, result)),
            Err(e) => {
                log::warn!("Error following cursor {}: {}", url, e);
                store.update(|s| s.apply_list_error(&e));
            }
        }
    });
}

pub fn load_detail(store: AppStore, ctx: AppContext, id: String) {
    store.update(|s| s.begin_detail_load());
    let api = ctx.api();
    spawn_local(async move {
        match api.fetch_detail(&id).await {
            Ok(book) => {
                log::info!("Loaded book {}", book.id);
                store.update(|s| s.apply_detail(book));
            }
            Err(e) => {
                match e.status {
                    Some(404) => log::info!("Book {} not found", id),
                    _ => log::warn!("Error fetching book details for {}: {}", id, e),
                }
                store.update(|s| s.apply_detail_error(&e));
            }
        }
    });
}

/// Dispatch on a route change
pub fn load_route(store: AppStore, ctx: AppContext, route: Route) {
    match route {
        Route::Detail(id) => load_detail(store, ctx, id),
        Route::Home | Route::Wishlist => load_list(store, ctx, 1),
    }
}

/// Persist the current filters and reload page 1 of the active list.
/// From the detail view this goes back home, which triggers the load.
pub fn apply_filters(store: AppStore, ctx: AppContext) {
    ctx.save_preferences(&store.filters().get_untracked());
    if ctx.route.get_untracked().is_list() {
        load_list(store, ctx, 1);
    } else {
        crate::route::navigate(&Route::Home);
    }
}
