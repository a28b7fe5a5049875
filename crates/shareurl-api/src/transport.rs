//! HTTP transport implementations.
//!
//! The production transport wraps a shared reqwest client. A scripted,
//! request-recording fake lives in the testing module for deterministic
//! substitution in tests.

use async_trait::async_trait;
use shareurl_core::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportResult,
};

use crate::config::ClientConfig;

// ============================================================================
// Reqwest Transport
// ============================================================================

/// Production transport backed by a shared reqwest client.
///
/// One attempt per request: transient failures surface to the caller
/// untouched. The client-level timeout comes from [`ClientConfig`];
/// individual requests may carry their own deadline.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

fn map_reqwest_error(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::InvalidUrl {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connect {
            message: err.to_string(),
        }
    } else {
        TransportError::Other {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url.as_str()),
            HttpMethod::Post => self.client.post(request.url.as_str()),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| map_reqwest_error(&e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| map_reqwest_error(&e))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

// ============================================================================
// Fake Transport for Testing
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct Inner {
        script: Mutex<VecDeque<TransportResult<HttpResponse>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    /// A scripted transport that records every request it is handed.
    ///
    /// Responses are consumed in the order they were queued; once the
    /// script runs dry, every further request gets an empty 200. Clones
    /// share state, so tests can keep one handle for inspection after
    /// moving another into the client.
    #[derive(Clone)]
    pub struct FakeTransport {
        inner: Arc<Inner>,
    }

    impl FakeTransport {
        /// Create a fake transport with an empty script.
        pub fn new() -> Self {
            Self {
                inner: Arc::new(Inner {
                    script: Mutex::new(VecDeque::new()),
                    requests: Mutex::new(Vec::new()),
                }),
            }
        }

        /// Queue a response with the given status and body.
        pub fn with_response(self, status: u16, body: impl AsRef<[u8]>) -> Self {
            self.inner.script.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                body: body.as_ref().to_vec(),
            }));
            self
        }

        /// Queue a transport failure.
        pub fn with_error(self, error: TransportError) -> Self {
            self.inner.script.lock().unwrap().push_back(Err(error));
            self
        }

        /// Requests seen so far, in order.
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.inner.requests.lock().unwrap().clone()
        }
    }

    impl Default for FakeTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
            self.inner.requests.lock().unwrap().push(request);
            self.inner
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Ok(HttpResponse {
                        status: 200,
                        body: Vec::new(),
                    })
                })
        }
    }
}
