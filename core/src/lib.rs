//! Signed client core for the Checkers check-run service.
//!
//! # Overview
//! Builds signed `POST`/`PATCH` requests for creating and updating check runs,
//! sends them through an injected `Transport`, and returns the status code and
//! parsed body of whatever the service answered.
//!
//! # Design
//! - `CheckersClient` holds only an immutable `ClientConfig` and its transport.
//! - Each operation is split into `build_*` (pure, produces a `SignedRequest`)
//!   and a dispatching method, so the signing contract is testable offline.
//! - Status codes are never judged here; see `CheckersResponse::is_success`.
//! - The signature scheme lives in `signer` and must match the server
//!   byte-for-byte.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod signer;
pub mod transport;
pub mod types;

pub use client::CheckersClient;
pub use config::ClientConfig;
pub use error::{CheckersError, TransportError};
pub use http::{HttpMethod, HttpResponse, SignedRequest, CLIENT_KEY_HEADER, SIGNATURE_HEADER};
pub use transport::{Transport, UreqTransport};
pub use types::{CheckCreateRequest, CheckRunId, CheckUpdateRequest, CheckersResponse, Operation};
