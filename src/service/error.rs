//! Error types for the purchase service and its HTTP boundary.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Purchase not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Error type for purchase service operations.
///
/// `Display` is the exact plain-text body sent to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not a decodable purchase. Holds the decoder's message.
    Decode(String),
    /// No `id` where one is required, or no purchase with that id.
    NotFound,
    /// Verb not served on the route.
    MethodNotAllowed,
    /// Store failure.
    Store(StoreError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Decode(_) => 400,
            ApiError::NotFound => 404,
            ApiError::MethodNotAllowed => 405,
            ApiError::Store(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Decode(msg) => write!(f, "{}", msg),
            ApiError::NotFound => write!(f, "{}", NOT_FOUND_MESSAGE),
            ApiError::MethodNotAllowed => write!(f, "{}", METHOD_NOT_ALLOWED_MESSAGE),
            ApiError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Store(other),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
