//! Handoff submission service - stash, submit, clear on success.

use std::sync::Arc;

use crate::domain::ShareRequest;
use crate::ports::{HandoffStore, SHARED_URL_KEY, SharePort, SubmitResult};

/// Service implementing the handoff contract around share submission.
///
/// The captured URL is stashed before the send so it survives the process
/// that attempted the submission; the stash is cleared only once the
/// server has confirmed success. Both methods return futures the caller
/// awaits or explicitly detaches - nothing is spawned internally.
pub struct HandoffService {
    share: Arc<dyn SharePort>,
    store: Arc<dyn HandoffStore>,
}

impl HandoffService {
    /// Create a new handoff service.
    pub fn new(share: Arc<dyn SharePort>, store: Arc<dyn HandoffStore>) -> Self {
        Self { share, store }
    }

    /// Stash `url`, submit it, and clear the stash on confirmed success.
    ///
    /// On failure the stash is left intact and the error is returned; the
    /// caller decides whether and when to try again.
    pub async fn submit(&self, url: &str) -> SubmitResult<String> {
        self.store.set(SHARED_URL_KEY, url);
        match self.share.send_data(url, None).await {
            Ok(body) => {
                self.store.clear(SHARED_URL_KEY);
                Ok(body)
            }
            Err(err) => {
                tracing::warn!(error = %err, "share submission failed, stashed URL retained");
                Err(err)
            }
        }
    }

    /// Submit a previously stashed URL, if any.
    ///
    /// Returns `Ok(None)` when nothing is stashed. A stashed URL is posted
    /// bare (no name or status metadata) and cleared on success.
    pub async fn submit_pending(&self) -> SubmitResult<Option<String>> {
        let Some(url) = self.store.get(SHARED_URL_KEY) else {
            return Ok(None);
        };
        let body = self.share.submit(&ShareRequest::new(url)).await?;
        self.store.clear(SHARED_URL_KEY);
        Ok(Some(body))
    }
}
