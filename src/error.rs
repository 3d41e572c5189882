//! Error types for convoscrape.
//!
//! The extraction pipeline degrades gracefully for anything caused by the
//! shape of third-party content; the only error it surfaces is the host
//! document itself being unreachable.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host document could not be read at all (empty or absent).
    ///
    /// This is the only failure the pipeline reports to callers; every
    /// content-shape problem degrades to a diagnostic result instead.
    #[error("Host document unreachable: {0}")]
    HostUnreachable(String),

    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
