//! Wishlist Heart Button
//!
//! Toggles membership for one book and restyles itself from the result.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view_model::WishlistToggle;

#[component]
pub fn WishlistButton(
    book_id: u32,
    initial: WishlistToggle,
) -> impl IntoView {
    let ctx = use_app_context();
    let (toggle, set_toggle) = signal(initial);
    let id = book_id.to_string();

    view! {
        <button
            class=move || toggle.get().class()
            title=move || toggle.get().title()
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                set_toggle.set(WishlistToggle::new(ctx.toggle_wishlist(&id)));
            }
        >
            "♥"
        </button>
    }
}
