//! Status-retrieval port trait and errors.

use async_trait::async_trait;
use thiserror::Error;

use super::http::TransportError;
use crate::domain::DownloadItem;

/// Errors from fetching status data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint URL could not be parsed; no request was made.
    #[error("invalid endpoint URL: {message}")]
    BadUrl {
        /// What was wrong with the URL
        message: String,
    },

    /// The server answered outside the 2xx range.
    #[error("server returned status {status}")]
    BadServerResponse {
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },

    /// The request never completed at the network level.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors from clearing the download history.
#[derive(Debug, Error)]
pub enum ClearError {
    /// The endpoint URL could not be parsed; no request was made.
    #[error("invalid endpoint URL: {message}")]
    BadUrl {
        /// What was wrong with the URL
        message: String,
    },

    /// The server answered outside the 2xx range.
    #[error("server returned status {status}")]
    BadServerResponse {
        /// HTTP status code
        status: u16,
    },

    /// The server accepted the request at the HTTP layer but rejected it
    /// logically in the body.
    #[error("server rejected clear request: {message}")]
    ServerRejected {
        /// The server's error message (may be empty)
        message: String,
    },

    /// The request never completed at the network level.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Port trait for reading and maintaining server-side download status.
#[async_trait]
pub trait StatusPort: Send + Sync {
    /// Fetch the list of prior submissions.
    ///
    /// Carries its own 60-second deadline; the server can return large
    /// histories. The returned order is whatever the server sent.
    async fn fetch_downloads(&self) -> Result<Vec<DownloadItem>, FetchError>;

    /// Ask the server to clear its download history.
    ///
    /// A 2xx response can still carry a logical rejection in the body;
    /// both layers are checked.
    async fn clear_history(&self) -> Result<(), ClearError>;

    /// Fetch the server's supported resolution options.
    ///
    /// Degrades to the static fallback list when the body cannot be
    /// decoded; transport and server failures still propagate.
    async fn list_resolutions(&self) -> Result<Vec<String>, FetchError>;
}
