//! API client for the shareurl processing server.
//!
//! The client implements the core `SharePort` and `StatusPort` traits on
//! top of an injected [`HttpTransport`], so the same protocol logic runs
//! against the production reqwest transport and against scripted fakes in
//! tests.

mod share;
mod status;

use shareurl_core::ports::HttpTransport;

use crate::config::ClientConfig;
use crate::transport::ReqwestTransport;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default API client using the reqwest transport.
pub type DefaultApiClient = ApiClient<ReqwestTransport>;

// ============================================================================
// Client
// ============================================================================

/// Client for the processing server's HTTP API.
///
/// Stateless beyond the injected transport and configuration: concurrent
/// calls are independent and no mutual exclusion is imposed. Construct a
/// new client when the server configuration changes.
pub struct ApiClient<T: HttpTransport> {
    pub(crate) transport: T,
    pub(crate) config: ClientConfig,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let transport = ReqwestTransport::new(&config);
        Self { transport, config }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: HttpTransport> ApiClient<T> {
    /// Create a client with a custom transport.
    ///
    /// Use this for testing with a fake transport.
    #[cfg(test)]
    pub(crate) const fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }
}
