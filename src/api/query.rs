//! Request URL construction and cursor parsing.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Parameters for a list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub genre: String,
    pub ids: Vec<String>,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: String::new(),
            ids: Vec::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    /// Build the request URL; parameters appear as `page`, `ids`, `search`, `topic`
    pub fn to_url(&self, endpoint: &str) -> String {
        let mut params = Vec::new();

        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }
        if !self.ids.is_empty() {
            params.push(format!("ids={}", self.ids.join(",")));
        }
        if !self.search.is_empty() {
            params.push(format!("search={}", encode_component(&self.search)));
        }
        if !self.genre.is_empty() {
            params.push(format!("topic={}", encode_component(&self.genre)));
        }

        if params.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}?{}", endpoint, params.join("&"))
        }
    }
}

/// Detail URL for a single book
pub fn detail_url(endpoint: &str, id: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), encode_component(id))
}

/// Read the `page` query parameter from a cursor URL.
///
/// Like `parseInt`, only the leading digits count (`3abc` is 3). Returns
/// `None` when the URL does not parse, the parameter is missing, or it has
/// no leading digits.
pub fn page_from_cursor(cursor: &str) -> Option<u32> {
    let url = Url::parse(cursor).ok()?;
    let (_, value) = url.query_pairs().find(|(key, _)| key == "page")?;
    leading_number(&value)
}

fn leading_number(value: &str) -> Option<u32> {
    let trimmed = value.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    if digits.is_empty() {
        return None;
    }
    // Saturate rather than fail on absurdly long digit runs
    Some(digits.parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    const API: &str = "https://gutendex.com/books";

    #[test]
    fn test_default_query_uses_bare_endpoint() {
        assert_eq!(ListQuery::default().to_url(API), API);
    }

    #[test]
    fn test_search_only_omits_page_one() {
        let query = ListQuery { search: "alice".into(), ..Default::default() };
        assert_eq!(query.to_url(API), "https://gutendex.com/books?search=alice");
    }

    #[test]
    fn test_full_query_parameter_order() {
        let query = ListQuery {
            search: "war & peace".into(),
            genre: "science fiction".into(),
            ids: vec!["11".into(), "84".into()],
            page: 3,
        };
        assert_eq!(
            query.to_url(API),
            "https://gutendex.com/books?page=3&ids=11,84&search=war%20%26%20peace&topic=science%20fiction"
        );
    }

    #[test]
    fn test_encode_component_matches_js() {
        assert_eq!(encode_component("don't (stop)!"), "don't%20(stop)!");
        assert_eq!(encode_component("café/é"), "caf%C3%A9%2F%C3%A9");
    }

    #[test]
    fn test_detail_url() {
        assert_eq!(detail_url(API, "84"), "https://gutendex.com/books/84");
        assert_eq!(detail_url("https://gutendex.com/books/", "84"), "https://gutendex.com/books/84");
    }

    #[test]
    fn test_page_from_cursor() {
        assert_eq!(page_from_cursor("https://gutendex.com/books/?page=3&search=alice"), Some(3));
        assert_eq!(page_from_cursor("https://gutendex.com/books/?search=alice&page=12"), Some(12));
        assert_eq!(page_from_cursor("https://gutendex.com/books/?search=alice"), None);
        assert_eq!(page_from_cursor("https://gutendex.com/books/"), None);
        assert_eq!(page_from_cursor("https://gutendex.com/books/?page=abc"), None);
        assert_eq!(page_from_cursor("https://gutendex.com/books/?pa%67e=7"), Some(7));
        assert_eq!(page_from_cursor("not a url?page=2"), None);
    }

    #[test]
    fn test_page_from_cursor_reads_leading_digits() {
        assert_eq!(page_from_cursor("https://x/?page=3abc"), Some(3));
        assert_eq!(page_from_cursor("https://x/?page=%203"), Some(3));
        assert_eq!(page_from_cursor("https://x/?page=99999999999"), Some(u32::MAX));
    }
}
