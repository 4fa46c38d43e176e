//! Error types for the Checkers client.
//!
//! # Design
//! Non-2xx responses are deliberately absent here: the client hands every
//! completed round-trip back as a `CheckersResponse` and leaves status
//! judgment to the caller. Errors only describe requests that could not be
//! built or could not complete.

use thiserror::Error;

use crate::types::Operation;

/// Errors returned by `CheckersClient` and the request builder.
#[derive(Debug, Error)]
pub enum CheckersError {
    /// An identifying field (owner, repo, sha, check name, check run id) was
    /// empty. Raised before any network call.
    #[error("{operation}: `{field}` must be a non-empty string")]
    InvalidArgument {
        operation: Operation,
        field: &'static str,
    },

    /// `ClientConfig` was given an empty URL, client key or client secret.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The transport could not complete the round-trip.
    #[error("{operation} {path}: transport failed")]
    Transport {
        operation: Operation,
        path: String,
        #[source]
        source: TransportError,
    },
}

/// Failures reported by a `Transport` implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection refused, timeout, TLS or malformed HTTP.
    #[error("request failed: {0}")]
    Request(String),

    /// The status line arrived but the body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}
