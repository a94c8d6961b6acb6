//! Hash Router
//!
//! `#home`, `#wishlist` and `#book/<id>` mapped to an explicit route type.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Wishlist,
    /// Book id as it appears in the fragment
    Detail(String),
}

impl Route {
    /// Parse a location hash. `None` means "redirect to home".
    pub fn parse(hash: &str) -> Option<Route> {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        match fragment {
            "" | "home" => Some(Route::Home),
            "wishlist" => Some(Route::Wishlist),
            _ => {
                let id = fragment.strip_prefix("book/")?.split('/').next()?;
                if id.is_empty() {
                    None
                } else {
                    Some(Route::Detail(id.to_string()))
                }
            }
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#home".to_string(),
            Route::Wishlist => "#wishlist".to_string(),
            Route::Detail(id) => format!("#book/{}", id),
        }
    }

    pub fn is_list(&self) -> bool {
        !matches!(self, Route::Detail(_))
    }
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Point the browser at `route`; the hashchange listener does the rest
pub fn navigate(route: &Route) {
    if let Err(e) = window().location().set_hash(&route.to_hash()) {
        log::warn!("Failed to navigate to {}: {:?}", route.to_hash(), e);
    }
}

pub fn go_back() {
    match window().history() {
        Ok(history) => {
            if let Err(e) = history.back() {
                log::warn!("history.back failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}

/// Resolve the current hash, redirecting unknown fragments to home
fn resolve(hash: &str) -> Route {
    match Route::parse(hash) {
        Some(route) => route,
        None => {
            log::debug!("Unknown route {:?}, redirecting home", hash);
            navigate(&Route::Home);
            Route::Home
        }
    }
}

/// Signal tracking the hash route; installs the `hashchange` listener
pub fn use_hash_route() -> ReadSignal<Route> {
    let (route, set_route) = signal(resolve(&current_hash()));

    // App-lifetime listener; the handle is never removed
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = resolve(&current_hash());
        if route.get_untracked() != next {
            log::debug!("Route changed to {:?}", next);
            set_route.set(next);
        }
    });

    route
}
