//! Error types for press-contacts.
//!
//! Extraction itself never fails: malformed HTML degrades to an empty
//! record. Errors only arise at the boundaries to external
//! collaborators (page fetching, record sinks).

/// Error type for batch processing and sink operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The injected page fetcher failed to retrieve a document.
    #[error("page fetch failed: {0}")]
    Fetch(String),

    /// Writing records to a sink failed.
    #[error("sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type alias for fetch and sink operations.
pub type Result<T> = std::result::Result<T, Error>;
