//! Error Types
//!
//! Every network problem collapses into `FetchError`; storage problems
//! into `StorageError`.

use thiserror::Error;

/// A failed catalog request (transport, HTTP status or body decode)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
    /// HTTP status when the server answered with a non-success code
    pub status: Option<u16>,
}

impl FetchError {
    pub fn status(code: u16) -> Self {
        Self {
            message: format!("HTTP error! Status: {}", code),
            status: Some(code),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            message: format!("Invalid response: {}", message.into()),
            status: None,
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    /// Body decode failures read "Invalid response: ..."; anything else is transport
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::from(e),
            other => FetchError::transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::decode(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<gloo_storage::errors::StorageError> for StorageError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::status(404);
        assert_eq!(err.to_string(), "HTTP error! Status: 404");
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = FetchError::transport("Failed to fetch");
        assert_eq!(err.to_string(), "Failed to fetch");
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_gloo_serde_error_is_decode() {
        let serde_err = serde_json::from_str::<crate::models::BookPage>("{").unwrap_err();
        let err = FetchError::from(gloo_net::Error::SerdeError(serde_err));
        assert!(err.message.starts_with("Invalid response: "), "{}", err.message);
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_other_gloo_error_is_transport() {
        let err = FetchError::from(gloo_net::Error::GlooError("Failed to fetch".into()));
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_malformed_page_body_is_decode() {
        for body in ["null", "[]", r#"{"count": "many"}"#, r#"{"count": 1, "results": [{"title": "no id"}]}"#] {
            let err = FetchError::from(serde_json::from_str::<crate::models::BookPage>(body).unwrap_err());
            assert!(err.to_string().starts_with("Invalid response: "), "{}", body);
        }
    }
}
