//! Status Banner Component
//!
//! Loading indicator and inline error / empty-state message.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, LoadStatus};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || match store.status().get() {
            LoadStatus::Loading => view! { <div id="loading" class="loading">"Loading books..."</div> }.into_any(),
            LoadStatus::Empty(message) | LoadStatus::Error(message) => {
                view! { <div id="error" class="error">{message}</div> }.into_any()
            }
            LoadStatus::Idle | LoadStatus::Ready => view! { <div class="status-idle"></div> }.into_any(),
        }}
    }
}
