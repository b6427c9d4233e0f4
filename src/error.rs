//! Error types for host calls and module installation.
//!
//! None of these reach the page. Per-call failures are logged and the
//! affected behavior is skipped; install failures are logged by the entry
//! point.

/// A single DOM or storage call that the browser rejected.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("local storage write failed: {0}")]
    Storage(String),
}

/// Failure while wiring the enhancer into a page.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("no window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to register {event} listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
