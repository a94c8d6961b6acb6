//! Book Card Component
//!
//! Grid entry for one book; clicking it opens the detail route.

use leptos::prelude::*;

use crate::components::WishlistButton;
use crate::context::use_app_context;
use crate::models::Book;
use crate::route::{navigate, Route};
use crate::view_model::BookCardView;

#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let ctx = use_app_context();
    let BookCardView {
        id,
        title,
        authors,
        cover_url,
        subjects,
        more_subjects,
        downloads,
        wishlist,
    } = BookCardView::new(&book, ctx.is_wishlisted_untracked(&book.id.to_string()));

    let cover = match cover_url {
        Some(src) => view! { <img src=src alt=format!("Cover for {}", title) /> }.into_any(),
        None => view! { <div>"No cover available"</div> }.into_any(),
    };

    let subject_tags = (!subjects.is_empty()).then(|| view! {
        <div class="book-subjects">
            {subjects.into_iter().map(|subject| view! {
                <span class="subject-tag">{subject}</span>
            }).collect_view()}
            {more_subjects.map(|more| view! { <span class="subject-tag">{more}</span> })}
        </div>
    });

    view! {
        <div class="book-card" on:click=move |_| navigate(&Route::Detail(id.to_string()))>
            <div class="book-cover">{cover}</div>
            <div class="book-info">
                <h2 class="book-title">{title}</h2>
                <div class="book-author">{authors}</div>
                {subject_tags}
                <div class="book-meta">
                    <span class="book-id">{format!("ID: {}", id)}</span>
                    <span class="book-downloads">{downloads}</span>
                </div>
            </div>
            <WishlistButton book_id=id initial=wishlist />
        </div>
    }
}
