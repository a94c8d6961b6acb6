//! Pagination Bar Component
//!
//! Prev/next cursor buttons around the numbered page strip. Hidden unless
//! the result set spans more than one page.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::pagination::PageControl;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let visible = move || store.pagination().with(|p| p.is_visible());
    let previous = move || store.pagination().with(|p| p.previous_cursor().map(str::to_string));
    let next = move || store.pagination().with(|p| p.next_cursor().map(str::to_string));

    let follow = move |cursor: Option<String>| {
        if let Some(url) = cursor {
            actions::load_cursor(store, ctx, url);
        }
    };

    let go_to_page = move |page: u32| {
        let target = store.pagination().try_update(|p| p.request_page(page)).flatten();
        if let Some(page) = target {
            actions::load_list(store, ctx, page);
        }
    };

    view! {
        <Show when=visible>
            <div id="pagination-container" class="pagination">
                <button
                    class="page-btn"
                    prop:disabled=move || previous().is_none()
                    on:click=move |_| follow(previous())
                >
                    "« Previous"
                </button>
                <div class="page-numbers">
                    {move || store.pagination().with(|p| p.controls()).into_iter().map(|control| match control {
                        PageControl::Page { number, current } => view! {
                            <button
                                class=if current { "page-num current" } else { "page-num" }
                                on:click=move |_| go_to_page(number)
                            >
                                {number}
                            </button>
                        }.into_any(),
                        PageControl::Ellipsis => view! { <span class="ellipsis">"..."</span> }.into_any(),
                    }).collect_view()}
                </div>
                <button
                    class="page-btn"
                    prop:disabled=move || next().is_none()
                    on:click=move |_| follow(next())
                >
                    "Next »"
                </button>
            </div>
        </Show>
    }
}
