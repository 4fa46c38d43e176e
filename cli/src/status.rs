//! Status-code judgment for responses the client hands back.
//!
//! `CheckersClient` returns every completed round-trip; this is where the
//! front-end decides that anything outside 2xx is a failure.

use checkers_core::CheckersResponse;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Checkers request failed. Status {status_code}: {body}")]
pub struct RequestFailed {
    pub status_code: u16,
    pub body: Value,
}

/// Pass 2xx responses through, turn everything else into `RequestFailed`.
pub fn ensure_success(response: CheckersResponse) -> Result<CheckersResponse, RequestFailed> {
    if response.is_success() {
        return Ok(response);
    }
    Err(RequestFailed {
        status_code: response.status_code,
        body: response.body,
    })
}
