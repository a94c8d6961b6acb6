//! Book View Models
//!
//! Pure mapping from `Book` (+ wishlist membership) to what the card and
//! detail components display.

use crate::models::{Book, Person};

/// Subjects shown on a card before collapsing into "+N more"
const CARD_SUBJECTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistToggle {
    pub active: bool,
}

impl WishlistToggle {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn class(&self) -> &'static str {
        if self.active { "wishlist-icon active" } else { "wishlist-icon" }
    }

    pub fn title(&self) -> &'static str {
        if self.active { "Remove from wishlist" } else { "Add to wishlist" }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookCardView {
    pub id: u32,
    pub title: String,
    pub authors: String,
    pub cover_url: Option<String>,
    pub subjects: Vec<String>,
    /// "+N more" when subjects were cut
    pub more_subjects: Option<String>,
    pub downloads: String,
    pub wishlist: WishlistToggle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookDetailView {
    pub id: u32,
    pub title: String,
    pub authors: String,
    pub cover_url: Option<String>,
    pub summary: Option<String>,
    pub languages: Option<String>,
    pub downloads: String,
    pub subjects: Vec<String>,
    pub bookshelves: Vec<String>,
    pub formats: Vec<FormatLink>,
    pub wishlist: WishlistToggle,
}

impl BookCardView {
    pub fn new(book: &Book, wishlisted: bool) -> Self {
        let extra = book.subjects.len().saturating_sub(CARD_SUBJECTS);
        Self {
            id: book.id,
            title: display_title(book),
            authors: format_authors(&book.authors),
            cover_url: book.cover_url().map(str::to_string),
            subjects: book.subjects.iter().take(CARD_SUBJECTS).cloned().collect(),
            more_subjects: (extra > 0).then(|| format!("+{} more", extra)),
            downloads: format!("{} downloads", format_count(book.download_count)),
            wishlist: WishlistToggle::new(wishlisted),
        }
    }
}

impl BookDetailView {
    pub fn new(book: &Book, wishlisted: bool) -> Self {
        Self {
            id: book.id,
            title: display_title(book),
            authors: format_authors(&book.authors),
            cover_url: book.cover_url().map(str::to_string),
            summary: book
                .summaries
                .as_ref()
                .and_then(|s| s.first())
                .cloned(),
            languages: (!book.languages.is_empty())
                .then(|| book.languages.join(", ").to_uppercase()),
            downloads: format_count(book.download_count),
            subjects: book.subjects.clone(),
            bookshelves: book.bookshelves.clone(),
            formats: format_links(book),
            wishlist: WishlistToggle::new(wishlisted),
        }
    }
}

fn display_title(book: &Book) -> String {
    if book.title.is_empty() {
        "Unknown Title".to_string()
    } else {
        book.title.clone()
    }
}

/// "Name (birth-death)" per author, comma separated
pub fn format_authors(authors: &[Person]) -> String {
    if authors.is_empty() {
        return "Unknown Author".to_string();
    }
    authors
        .iter()
        .map(|author| match (author.birth_year, author.death_year) {
            (Some(birth), Some(death)) if birth != 0 && death != 0 => {
                format!("{} ({}-{})", author.name, birth, death)
            }
            _ => author.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Thousands-separated count (`1234567` -> `1,234,567`)
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Download links for everything except the cover image
fn format_links(book: &Book) -> Vec<FormatLink> {
    book.formats
        .iter()
        .filter_map(|(mime, url)| Some((mime, url.as_str()?)))
        .filter(|(mime, url)| mime.as_str() != "image/jpeg" && !url.is_empty())
        .map(|(mime, url)| FormatLink {
            label: mime
                .split_once('/')
                .map(|(_, sub)| sub)
                .filter(|sub| !sub.is_empty())
                .unwrap_or(mime.as_str())
                .to_string(),
            url: url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn person(name: &str, birth: Option<i32>, death: Option<i32>) -> Person {
        Person { name: name.to_string(), birth_year: birth, death_year: death }
    }

    fn make_book() -> Book {
        let mut formats = Map::new();
        formats.insert("text/html".into(), "https://files/11.html".into());
        formats.insert("image/jpeg".into(), "https://covers/11.jpg".into());
        formats.insert("application/epub+zip".into(), "https://files/11.epub".into());
        formats.insert("text/plain".into(), "".into());

        Book {
            id: 11,
            title: "Alice's Adventures in Wonderland".to_string(),
            authors: vec![person("Carroll, Lewis", Some(1832), Some(1898))],
            subjects: vec![
                "Fantasy fiction".into(),
                "Children's stories".into(),
                "Imaginary places".into(),
                "Alice (Fictitious character)".into(),
                "Wonderland".into(),
            ],
            bookshelves: vec!["Children's Literature".into()],
            languages: vec!["en".into(), "fr".into()],
            download_count: 1234567,
            formats,
            summaries: Some(vec!["A girl falls down a rabbit hole.".into()]),
        }
    }

    #[test]
    fn test_card_view() {
        let card = BookCardView::new(&make_book(), false);
        assert_eq!(card.authors, "Carroll, Lewis (1832-1898)");
        assert_eq!(card.cover_url.as_deref(), Some("https://covers/11.jpg"));
        assert_eq!(card.subjects.len(), 3);
        assert_eq!(card.more_subjects.as_deref(), Some("+2 more"));
        assert_eq!(card.downloads, "1,234,567 downloads");
        assert_eq!(card.wishlist.class(), "wishlist-icon");
        assert_eq!(card.wishlist.title(), "Add to wishlist");
    }

    #[test]
    fn test_card_view_for_sparse_book() {
        let book = Book {
            id: 5,
            title: String::new(),
            authors: Vec::new(),
            subjects: vec!["One".into()],
            bookshelves: Vec::new(),
            languages: Vec::new(),
            download_count: 0,
            formats: Map::new(),
            summaries: None,
        };
        let card = BookCardView::new(&book, true);
        assert_eq!(card.title, "Unknown Title");
        assert_eq!(card.authors, "Unknown Author");
        assert!(card.cover_url.is_none());
        assert!(card.more_subjects.is_none());
        assert_eq!(card.downloads, "0 downloads");
        assert_eq!(card.wishlist.title(), "Remove from wishlist");
    }

    #[test]
    fn test_detail_view() {
        let detail = BookDetailView::new(&make_book(), true);
        assert_eq!(detail.summary.as_deref(), Some("A girl falls down a rabbit hole."));
        assert_eq!(detail.languages.as_deref(), Some("EN, FR"));
        assert_eq!(detail.downloads, "1,234,567");
        assert_eq!(detail.subjects.len(), 5);
        assert_eq!(
            detail.formats,
            vec![
                FormatLink { label: "html".into(), url: "https://files/11.html".into() },
                FormatLink { label: "epub+zip".into(), url: "https://files/11.epub".into() },
            ]
        );
        assert_eq!(detail.wishlist.class(), "wishlist-icon active");
    }

    #[test]
    fn test_authors_need_both_years() {
        let authors = vec![
            person("Homer", None, Some(-700)),
            person("Austen, Jane", Some(1775), Some(1817)),
        ];
        assert_eq!(format_authors(&authors), "Homer, Austen, Jane (1775-1817)");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(91302), "91,302");
    }
}
