//! Book Details Component
//!
//! Full view of the book loaded for `#book/<id>`.

use leptos::prelude::*;

use crate::components::WishlistButton;
use crate::context::use_app_context;
use crate::models::Book;
use crate::route::go_back;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::BookDetailView;

/// Tag list section, omitted when empty
fn tag_section(heading: &'static str, class: &'static str, tags: Vec<String>) -> Option<impl IntoView> {
    (!tags.is_empty()).then(move || view! {
        <div class="details-tags">
            <h3>{heading}</h3>
            <div class="tag-container">
                {tags.into_iter().map(|tag| view! { <span class=class>{tag}</span> }).collect_view()}
            </div>
        </div>
    })
}

#[component]
fn DetailPanel(book: Book) -> impl IntoView {
    let ctx = use_app_context();
    let detail = BookDetailView::new(&book, ctx.is_wishlisted_untracked(&book.id.to_string()));

    let cover = match detail.cover_url {
        Some(src) => view! { <img src=src alt=format!("Cover for {}", detail.title) /> }.into_any(),
        None => view! { <div class="no-cover">"No cover available"</div> }.into_any(),
    };

    view! {
        <div class="book-details">
            <div class="details-header">
                <button class="back-button" on:click=move |_| go_back()>"← Back"</button>
                <WishlistButton book_id=detail.id initial=detail.wishlist />
            </div>

            <div class="details-content">
                <div class="details-cover">{cover}</div>

                <div class="details-info">
                    <h1 class="details-title">{detail.title}</h1>
                    <div class="details-author">{detail.authors}</div>

                    {detail.summary.map(|summary| view! {
                        <div class="details-summary">
                            <h3>"Summary"</h3>
                            <p>{summary}</p>
                        </div>
                    })}

                    <div class="details-meta">
                        {detail.languages.map(|languages| view! {
                            <div class="details-languages">
                                <h3>"Languages"</h3>
                                <p>{languages}</p>
                            </div>
                        })}
                        <div class="details-downloads">
                            <h3>"Download Count"</h3>
                            <p>{detail.downloads}</p>
                        </div>
                    </div>

                    {tag_section("Subjects", "subject-tag", detail.subjects)}
                    {tag_section("Bookshelves", "bookshelf-tag", detail.bookshelves)}

                    <div class="details-formats">
                        <h3>"Available Formats"</h3>
                        <div class="formats-container">
                            {detail.formats.into_iter().map(|format| view! {
                                <a href=format.url target="_blank" class="format-button">{format.label}</a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn BookDetails() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.detail().get().map(|book| view! { <DetailPanel book=book /> })}
    }
}
