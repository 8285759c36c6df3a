//! Fetch error type and its coarse classification.

use thiserror::Error;

use crate::storage::StorageError;

/// Why a single fetch did not produce a saved image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl failed: DNS, refused connection, timeout, TLS, malformed URL.
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Declared Content-Type does not start with `image/`.
    #[error("not an image (Content-Type: {content_type:?})")]
    NotAnImage { content_type: String },
    /// Creating, listing or writing the destination failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// How the caller should report a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection-level or HTTP status failure.
    Network,
    /// Response was not an image; reported as a skip.
    NotAnImage,
    /// Anything else (filesystem).
    Unexpected,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Http { .. } => FetchErrorKind::Network,
            FetchError::NotAnImage { .. } => FetchErrorKind::NotAnImage,
            FetchError::Storage(_) => FetchErrorKind::Unexpected,
        }
    }
}
