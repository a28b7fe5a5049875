//! HTTP transport port.
//!
//! A single capability: send one HTTP request, get back a status code and
//! body bytes. Both the share and status sides of the client depend only
//! on this seam, never on a concrete HTTP stack, so tests can substitute
//! a scripted fake.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Network-level failures below the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request deadline elapsed.
    #[error("request timed out")]
    Timeout,

    /// The request was cancelled by the caller.
    #[error("request was cancelled")]
    Cancelled,

    /// The request URL could not be parsed.
    #[error("invalid request URL: {message}")]
    InvalidUrl {
        /// What was wrong with the URL
        message: String,
    },

    /// The connection could not be established (DNS, refused, reset).
    #[error("connection failed: {message}")]
    Connect {
        /// Description of the connection failure
        message: String,
    },

    /// Any other transport failure.
    #[error("transport failure: {message}")]
    Other {
        /// Description of the failure
        message: String,
    },
}

/// HTTP method used by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
}

/// A single outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method
    pub method: HttpMethod,
    /// Absolute request URL; the transport parses it
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
    /// Per-request deadline overriding the transport default
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Build a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Build a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Append a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a per-request deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Response to a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx success range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for transports able to execute one HTTP request.
///
/// The production implementation lives in `shareurl-api`. Implementations
/// perform exactly one attempt; retry policy, if any, belongs to callers.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute `request` and return the raw response.
    async fn send(&self, request: HttpRequest) -> TransportResult<HttpResponse>;
}
