//! Error type for council client operations.

use thiserror::Error;

/// Errors surfaced to callers of [`CouncilClient`](crate::client::CouncilClient).
///
/// Streaming distinguishes two tiers. Stream-level failures - a
/// rejected initial request or a broken transport mid-stream - are
/// fatal and reported through this type. Line-level failures - one
/// `data:` line whose payload fails structural parsing - never abort
/// the stream: the client logs a diagnostic and skips the line.
#[derive(Debug, Error)]
pub enum CouncilError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}
