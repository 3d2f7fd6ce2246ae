//! Error types and handling for lazy-stream
//!
//! The only hard failure in the library is forcing `head` or `tail` on the
//! empty stream. Non-termination of an eager operation on an infinite stream
//! is documented caller error, not a recoverable condition, so there is no
//! retry or recovery machinery here.

use thiserror::Error;

/// Main error type for lazy-stream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// `head` or `tail` was invoked on the empty stream
    #[error("Stream is empty!")]
    Empty,
}

/// Result type for lazy-stream operations
pub type StreamResult<T> = Result<T, StreamError>;
