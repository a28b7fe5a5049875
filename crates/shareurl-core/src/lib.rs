#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{
    CLEAR_HISTORY_PATH, DEFAULT_SERVER_URL, DOWNLOAD_PATH, RESOLUTION_PATH, SERVER_URL_KEY,
    STATUS_PATH, ServerConfig,
};
pub use domain::{
    DEFAULT_RESOLUTION, DownloadItem, FALLBACK_RESOLUTIONS, ShareRequest, StatusCategory,
    fallback_resolutions, is_valid_share_url,
};
pub use ports::{
    ClearError, ConfigStore, FetchError, HandoffStore, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, SHARED_URL_KEY, SharePort, StatusPort, SubmitError, SubmitResult,
    TransportError, TransportResult,
};
pub use services::HandoffService;

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
