//! Book Grid Component
//!
//! Cards for the books on the current list page.

use leptos::prelude::*;

use crate::components::BookCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BookGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="books-container" class="books-grid">
            <For
                each=move || store.books().get()
                key=|book| book.id
                children=move |book| view! { <BookCard book=book /> }
            />
        </div>
    }
}
