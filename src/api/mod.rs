//! Gutendex API Client
//!
//! Thin wrappers over `fetch` for the three requests the browser makes.
//! No retries; every failure becomes a `FetchError`.

mod query;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::{Book, BookPage};

pub use query::*;

/// Client bound to one books endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct BooksApi {
    endpoint: String,
}

impl BooksApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// List books matching the filters
    pub async fn fetch_list(&self, query: &ListQuery) -> Result<BookPage, FetchError> {
        get_json(&query.to_url(&self.endpoint)).await
    }

    /// Fetch a single book by id
    pub async fn fetch_detail(&self, id: &str) -> Result<Book, FetchError> {
        get_json(&detail_url(&self.endpoint, id)).await
    }

    /// Follow a `next`/`previous` cursor returned by the API
    pub async fn fetch_by_url(&self, url: &str) -> Result<BookPage, FetchError> {
        get_json(url).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    log::debug!("GET {}", url);

    let response = Request::get(url).send().await?;
    if !response.ok() {
        let err = FetchError::status(response.status());
        log::warn!("GET {} failed: {}", url, err);
        return Err(err);
    }

    response.json::<T>().await.map_err(FetchError::from)
}
