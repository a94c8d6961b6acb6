//! Search Bar Component
//!
//! Debounced search input plus genre select. Both seed from the saved
//! preferences and write them back on change.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::debounce::{Debouncer, GlooScheduler};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let config = ctx.config();

    let (search_text, set_search_text) = signal(store.filters().get_untracked().search);
    let debouncer = StoredValue::new_local(Debouncer::new(GlooScheduler, config.search_debounce_ms));

    let on_search_input = move |value: String| {
        set_search_text.set(value.clone());

        let term = value.trim().to_string();
        debouncer.update_value(|d| {
            d.schedule(move || {
                store.filters().update(|f| f.search = term);
                actions::apply_filters(store, ctx);
            })
        });
    };

    let on_genre_change = move |genre: String| {
        store.filters().update(|f| f.genre = genre);
        actions::apply_filters(store, ctx);
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                id="search-input"
                placeholder="Search by title or author..."
                autocomplete="off"
                prop:value=move || search_text.get()
                on:input=move |ev| on_search_input(event_target_value(&ev))
            />
            <select id="genre-select" on:change=move |ev| on_genre_change(event_target_value(&ev))>
                {config.genres.iter().map(|&(value, label)| view! {
                    <option
                        value=value
                        prop:selected=move || store.filters().with(|f| f.genre == value)
                    >
                        {label}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
