//! Error types for the fetch-and-decode pipeline.

use thiserror::Error;

use crate::net::response::OutOfMemory;

/// Failure of a whole catalog fetch.
///
/// Per-field decode problems never show up here; they degrade to defaults
/// inside the decoder. Every variant aborts the fetch with no partial result.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No server URL was configured.
    #[error("server URL is empty")]
    EmptyServerUrl,

    /// The Basic-Auth credential could not be built.
    #[error("failed to encode credentials: {0}")]
    AuthEncoding(String),

    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The body is not JSON, or its top level has no record array.
    #[error("malformed catalog document: {0}")]
    MalformedDocument(String),

    /// The response buffer could not grow.
    #[error(transparent)]
    OutOfMemory(#[from] OutOfMemory),

    /// A background fetch was aborted before it produced a result.
    #[error("fetch was cancelled")]
    Cancelled,

    /// The async runtime for a blocking fetch could not start.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl CatalogError {
    /// Whether the failure happened on the wire rather than in the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }
}
