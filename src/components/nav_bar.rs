//! Navigation Bar Component
//!
//! Home / Wishlist links; the active one follows the hash route.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let link_class = move |target: Route| {
        move || if ctx.route.get() == target { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="header">
            <h1 class="logo">"Gutendex Books"</h1>
            <nav class="nav">
                <a id="nav-home" href=Route::Home.to_hash() class=link_class(Route::Home)>"Home"</a>
                <a id="nav-wishlist" href=Route::Wishlist.to_hash() class=link_class(Route::Wishlist)>
                    "Wishlist"
                    <span class="wishlist-count">{move || ctx.wishlist_len()}</span>
                </a>
            </nav>
        </header>
    }
}
