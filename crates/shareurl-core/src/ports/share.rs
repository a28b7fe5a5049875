//! Share-submission port trait and errors.

use async_trait::async_trait;
use thiserror::Error;

use super::http::TransportError;
use crate::domain::ShareRequest;

/// Result type alias for share-submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Errors from share-submission operations.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered outside the 2xx range.
    #[error("server returned status {status}")]
    BadServerResponse {
        /// HTTP status code
        status: u16,
    },

    /// The request never completed at the network level.
    ///
    /// A malformed endpoint URL also lands here: the submission path hands
    /// the URL straight to the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Port trait for submitting share requests.
///
/// Implementations perform exactly one attempt per call: no retry, no
/// backoff, no idempotency key. Two identical calls produce two
/// independent server-side records; any retry policy belongs to the
/// caller.
#[async_trait]
pub trait SharePort: Send + Sync {
    /// Submit a share request and return the server's success payload.
    ///
    /// The payload is the response body as UTF-8 text; bodies that are not
    /// valid UTF-8 collapse to the literal `"Success"`.
    async fn submit(&self, request: &ShareRequest) -> SubmitResult<String>;

    /// Submit a URL with the standard interactive-share metadata.
    ///
    /// `resolution` falls back to the default tier when `None`.
    async fn send_data(&self, url: &str, resolution: Option<&str>) -> SubmitResult<String>;
}
