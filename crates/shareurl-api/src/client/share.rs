//! Share submission operations.

use async_trait::async_trait;
use shareurl_core::domain::{DEFAULT_RESOLUTION, ShareRequest};
use shareurl_core::ports::{HttpRequest, HttpTransport, SharePort, SubmitError, SubmitResult};

use super::ApiClient;

/// Payload returned when a success body is not valid UTF-8.
///
/// Part of the wire contract; callers compare against this literal.
const SUCCESS_FALLBACK: &str = "Success";

#[async_trait]
impl<T: HttpTransport> SharePort for ApiClient<T> {
    async fn submit(&self, request: &ShareRequest) -> SubmitResult<String> {
        let body = serde_json::to_vec(request).expect("share request serializes to JSON");
        let http_request = HttpRequest::post(self.config.server.download_endpoint())
            .with_header("Content-Type", "application/json")
            .with_body(body);

        let response = self.transport.send(http_request).await?;
        if !response.is_success() {
            return Err(SubmitError::BadServerResponse {
                status: response.status,
            });
        }

        Ok(String::from_utf8(response.body).unwrap_or_else(|_| SUCCESS_FALLBACK.to_string()))
    }

    async fn send_data(&self, url: &str, resolution: Option<&str>) -> SubmitResult<String> {
        let request = ShareRequest::shared(url, resolution.unwrap_or(DEFAULT_RESOLUTION));
        self.submit(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use crate::transport::testing::FakeTransport;
    use shareurl_core::ports::{HttpMethod, TransportError};
    use serde_json::{Value, json};

    fn request() -> ShareRequest {
        ShareRequest::shared("https://example.com/video", "medium")
    }

    #[tokio::test]
    async fn test_submit_returns_body_on_success() {
        let transport = FakeTransport::new().with_response(200, "ok");
        let client = test_client(transport);

        let result = client.submit(&request()).await.unwrap();
        assert_eq!(result, "ok");
    }

    #[tokio::test]
    async fn test_submit_posts_json_to_download_endpoint() {
        let transport = FakeTransport::new().with_response(200, "ok");
        let client = test_client(transport.clone());

        client.submit(&request()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://ds224:3000/download");
        assert!(requests[0].headers.iter().any(|(name, value)| {
            name == "Content-Type" && value == "application/json"
        }));

        let sent: Value = serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(
            sent,
            json!({
                "url": "https://example.com/video",
                "name": "Shared Data",
                "status": "Shared",
                "resolution": "medium"
            })
        );
    }

    #[tokio::test]
    async fn test_submit_bad_server_response() {
        for status in [500, 503, 599] {
            let transport = FakeTransport::new().with_response(status, "Internal Error");
            let client = test_client(transport);

            let result = client.submit(&request()).await;
            assert!(matches!(
                result,
                Err(SubmitError::BadServerResponse { status: s }) if s == status
            ));
        }
    }

    #[tokio::test]
    async fn test_submit_surfaces_timeout_as_transport_error() {
        let transport = FakeTransport::new().with_error(TransportError::Timeout);
        let client = test_client(transport);

        let result = client.submit(&request()).await;
        assert!(matches!(
            result,
            Err(SubmitError::Transport(TransportError::Timeout))
        ));
    }

    #[tokio::test]
    async fn test_submit_falls_back_on_non_utf8_body() {
        let transport = FakeTransport::new().with_response(200, [0xff, 0xfe, 0xfd]);
        let client = test_client(transport);

        let result = client.submit(&request()).await.unwrap();
        assert_eq!(result, "Success");
    }

    #[tokio::test]
    async fn test_submit_twice_is_not_deduplicated() {
        // No idempotency key: identical submissions each reach the server.
        let transport = FakeTransport::new()
            .with_response(200, "one")
            .with_response(200, "two");
        let client = test_client(transport.clone());

        let first = client.submit(&request()).await.unwrap();
        let second = client.submit(&request()).await.unwrap();

        assert_eq!(first, "one");
        assert_eq!(second, "two");
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].body, requests[1].body);
    }

    #[tokio::test]
    async fn test_send_data_defaults_resolution_to_medium() {
        let transport = FakeTransport::new().with_response(200, "ok");
        let client = test_client(transport.clone());

        client.send_data("https://example.com/video", None).await.unwrap();

        let sent: Value =
            serde_json::from_slice(transport.requests()[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(sent["resolution"], "medium");
        assert_eq!(sent["name"], "Shared Data");
        assert_eq!(sent["status"], "Shared");
    }

    #[tokio::test]
    async fn test_send_data_with_explicit_resolution() {
        let transport = FakeTransport::new().with_response(200, "ok");
        let client = test_client(transport.clone());

        client
            .send_data("https://example.com/video", Some("hd"))
            .await
            .unwrap();

        let sent: Value =
            serde_json::from_slice(transport.requests()[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(sent["resolution"], "hd");
    }
}
