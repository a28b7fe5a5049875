//! Server configuration and endpoint construction.
//!
//! The base URL is user-editable and persisted through a [`ConfigStore`];
//! the endpoint paths themselves are fixed parts of the server contract.

use crate::ports::ConfigStore;

/// Server base URL used when no value has been stored.
pub const DEFAULT_SERVER_URL: &str = "http://ds224:3000";

/// [`ConfigStore`] key under which the server base URL is persisted.
pub const SERVER_URL_KEY: &str = "serverUrl";

/// Path of the share-submission endpoint.
pub const DOWNLOAD_PATH: &str = "/download";

/// Path of the status-listing endpoint.
pub const STATUS_PATH: &str = "/status";

/// Path of the history-clearing endpoint.
pub const CLEAR_HISTORY_PATH: &str = "/clear-history";

/// Path of the resolution-options endpoint.
pub const RESOLUTION_PATH: &str = "/resolution";

/// Connection configuration for the processing server.
///
/// Holds the base URL; endpoint URLs are derived from it. Construct one
/// per configuration change and pass it to the client explicitly - there
/// is no ambient global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the configuration from a store.
    ///
    /// Falls back to [`DEFAULT_SERVER_URL`] when nothing is persisted.
    pub fn from_store(store: &dyn ConfigStore) -> Self {
        store.get(SERVER_URL_KEY).map_or_else(Self::default, Self::new)
    }

    /// Persist the base URL to a store.
    pub fn persist_to(&self, store: &dyn ConfigStore) {
        store.set(SERVER_URL_KEY, &self.base_url);
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Full URL of the share-submission endpoint.
    pub fn download_endpoint(&self) -> String {
        self.endpoint(DOWNLOAD_PATH)
    }

    /// Full URL of the status-listing endpoint.
    pub fn status_endpoint(&self) -> String {
        self.endpoint(STATUS_PATH)
    }

    /// Full URL of the history-clearing endpoint.
    pub fn clear_history_endpoint(&self) -> String {
        self.endpoint(CLEAR_HISTORY_PATH)
    }

    /// Full URL of the resolution-options endpoint.
    pub fn resolution_endpoint(&self) -> String {
        self.endpoint(RESOLUTION_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MemoryConfigStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl MemoryConfigStore {
        fn new() -> Self {
            Self {
                values: Mutex::new(HashMap::new()),
            }
        }
    }

    impl ConfigStore for MemoryConfigStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url(), "http://ds224:3000");
    }

    #[test]
    fn test_endpoint_joins() {
        let config = ServerConfig::new("http://nas.local:3000");
        assert_eq!(config.download_endpoint(), "http://nas.local:3000/download");
        assert_eq!(config.status_endpoint(), "http://nas.local:3000/status");
        assert_eq!(
            config.clear_history_endpoint(),
            "http://nas.local:3000/clear-history"
        );
        assert_eq!(
            config.resolution_endpoint(),
            "http://nas.local:3000/resolution"
        );
    }

    #[test]
    fn test_endpoint_joins_trim_trailing_slash() {
        let config = ServerConfig::new("http://nas.local:3000/");
        assert_eq!(config.status_endpoint(), "http://nas.local:3000/status");
    }

    #[test]
    fn test_from_store_falls_back_to_default() {
        let store = MemoryConfigStore::new();
        let config = ServerConfig::from_store(&store);
        assert_eq!(config.base_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_from_store_prefers_stored_value() {
        let store = MemoryConfigStore::new();
        store.set(SERVER_URL_KEY, "http://other:8080");
        let config = ServerConfig::from_store(&store);
        assert_eq!(config.base_url(), "http://other:8080");
    }

    #[test]
    fn test_persist_round_trip() {
        let store = MemoryConfigStore::new();
        let config = ServerConfig::new("http://other:8080");
        config.persist_to(&store);
        assert_eq!(ServerConfig::from_store(&store), config);
    }
}
