//! Backend error type.

use thiserror::Error;

/// Failure talking to the git hosting API.
///
/// Contention (422 on create) and absence (404 on delete, 404 on ref read)
/// are not errors and never produce this type.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never produced an HTTP response (DNS, TLS, timeout, ...).
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The lock name would address a different ref once put in a URL.
    #[error("lock name \"{name}\" contains a character that is not allowed in a request path")]
    InvalidLockName { name: String },

    /// The API answered with a status this operation does not expect.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be read or parsed.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The lock ref resolved, but its commit could not be read.
    ///
    /// Distinct from absence: the two dependent reads disagree.
    #[error("lock ref {reference} points at {sha}, but the commit could not be read: {source}")]
    InconsistentRead {
        reference: String,
        sha: String,
        #[source]
        source: Box<BackendError>,
    },
}

/// Result type alias for backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;
