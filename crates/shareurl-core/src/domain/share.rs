//! Share-submission request contract.

use serde::{Deserialize, Serialize};
use url::Url;

/// Resolution requested when the caller does not specify one.
pub const DEFAULT_RESOLUTION: &str = "medium";

/// Static fallback set of resolution options.
///
/// The server's resolution endpoint is authoritative; this list stands in
/// only when its response cannot be decoded. The two are not reconciled.
pub const FALLBACK_RESOLUTIONS: &[&str] = &["low", "medium", "high", "hd", "best"];

/// Name attached to submissions built by [`ShareRequest::shared`].
const SHARED_NAME: &str = "Shared Data";

/// Status attached to submissions built by [`ShareRequest::shared`].
const SHARED_STATUS: &str = "Shared";

/// The fallback resolution options as owned strings.
pub fn fallback_resolutions() -> Vec<String> {
    FALLBACK_RESOLUTIONS.iter().map(ToString::to_string).collect()
}

/// Payload POSTed to the server's download endpoint.
///
/// Optional fields are omitted from the JSON body when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    /// URL handed to the server for processing
    pub url: String,
    /// Display name for the submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial status label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Requested resolution tier (opaque to the client)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl ShareRequest {
    /// Create a bare request carrying only the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            status: None,
            resolution: None,
        }
    }

    /// Create a request the way interactive share flows do.
    ///
    /// Fixed name and status labels plus an explicit resolution.
    pub fn shared(url: impl Into<String>, resolution: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: Some(SHARED_NAME.to_string()),
            status: Some(SHARED_STATUS.to_string()),
            resolution: Some(resolution.into()),
        }
    }

    /// Whether `url` is a syntactically valid http/https URL.
    ///
    /// Submission is only meaningful for URLs that pass this check; the
    /// server does not enforce it.
    pub fn has_valid_url(&self) -> bool {
        is_valid_share_url(&self.url)
    }
}

/// Check that a string parses as an absolute http/https URL.
pub fn is_valid_share_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}
