//! UI Components
//!
//! Leptos components painting the store's view models.

mod book_card;
mod book_details;
mod book_grid;
mod nav_bar;
mod pagination_bar;
mod search_bar;
mod status_banner;
mod wishlist_button;

pub use book_card::BookCard;
pub use book_details::BookDetails;
pub use book_grid::BookGrid;
pub use nav_bar::NavBar;
pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
pub use status_banner::StatusBanner;
pub use wishlist_button::WishlistButton;
