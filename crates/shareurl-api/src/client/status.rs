//! Status retrieval operations.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use shareurl_core::domain::{DownloadItem, fallback_resolutions};
use shareurl_core::ports::{ClearError, FetchError, HttpRequest, HttpTransport, StatusPort};
use url::Url;

use super::ApiClient;

/// Deadline applied to the status fetch, which can return large histories.
const STATUS_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Acknowledgement body optionally returned by the clear-history endpoint.
#[derive(Debug, Deserialize)]
struct ClearAck {
    success: Option<bool>,
    error: Option<String>,
}

/// Body of the resolution-options endpoint.
#[derive(Debug, Deserialize)]
struct ResolutionOptions {
    options: Vec<String>,
}

/// Validate an endpoint string before any transport call.
fn checked_endpoint(endpoint: String) -> Result<String, String> {
    match Url::parse(&endpoint) {
        Ok(_) => Ok(endpoint),
        Err(err) => Err(err.to_string()),
    }
}

#[async_trait]
impl<T: HttpTransport> StatusPort for ApiClient<T> {
    async fn fetch_downloads(&self) -> Result<Vec<DownloadItem>, FetchError> {
        let endpoint = checked_endpoint(self.config.server.status_endpoint())
            .map_err(|message| FetchError::BadUrl { message })?;

        let request = HttpRequest::get(endpoint).with_timeout(STATUS_FETCH_TIMEOUT);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(FetchError::BadServerResponse {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })
    }

    async fn clear_history(&self) -> Result<(), ClearError> {
        let endpoint = checked_endpoint(self.config.server.clear_history_endpoint())
            .map_err(|message| ClearError::BadUrl { message })?;

        let response = self.transport.send(HttpRequest::post(endpoint)).await?;
        if !response.is_success() {
            return Err(ClearError::BadServerResponse {
                status: response.status,
            });
        }

        // A 2xx can still carry a logical rejection in the body.
        if let Ok(ack) = serde_json::from_slice::<ClearAck>(&response.body) {
            if ack.success == Some(false) {
                return Err(ClearError::ServerRejected {
                    message: ack.error.unwrap_or_default(),
                });
            }
        }

        Ok(())
    }

    async fn list_resolutions(&self) -> Result<Vec<String>, FetchError> {
        let endpoint = checked_endpoint(self.config.server.resolution_endpoint())
            .map_err(|message| FetchError::BadUrl { message })?;

        let response = self.transport.send(HttpRequest::get(endpoint)).await?;
        if !response.is_success() {
            return Err(FetchError::BadServerResponse {
                status: response.status,
            });
        }

        // Resolution choices are a UI affordance: an undecodable body
        // degrades to the static fallback instead of failing the call.
        match serde_json::from_slice::<ResolutionOptions>(&response.body) {
            Ok(parsed) => Ok(parsed.options),
            Err(_) => Ok(fallback_resolutions()),
        }
    }
}
