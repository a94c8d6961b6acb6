//! Frontend Models
//!
//! Data structures matching Gutendex JSON responses.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` like a missing field
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Book author or translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub authors: Vec<Person>,
    #[serde(default, deserialize_with = "null_default")]
    pub subjects: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub bookshelves: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub download_count: u64,
    /// MIME type -> download URL, in response order
    #[serde(default, deserialize_with = "null_default")]
    pub formats: Map<String, Value>,
    #[serde(default)]
    pub summaries: Option<Vec<String>>,
}

impl Book {
    pub fn cover_url(&self) -> Option<&str> {
        self.formats
            .get("image/jpeg")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// One page of list results plus pagination cursors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPage {
    #[serde(default, deserialize_with = "null_default")]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub results: Vec<Book>,
}
