//! Handoff store port bridging capture and main-process contexts.

/// Key under which a captured URL awaits pickup.
pub const SHARED_URL_KEY: &str = "sharedURL";

/// Transient storage bridging an out-of-process capture context and the
/// main application process.
///
/// The contract: write the captured URL before attempting submission,
/// clear it only on confirmed success, leave it intact on failure so a
/// later caller can pick it up. The core implements the clear-on-success
/// half; scheduling any retry is the host's concern.
pub trait HandoffStore: Send + Sync {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str);

    /// Remove a stored value.
    fn clear(&self, key: &str);
}
