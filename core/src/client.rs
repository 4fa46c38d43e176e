//! Signed client for the Checkers API.
//!
//! # Design
//! `CheckersClient` holds an immutable `ClientConfig` and the `Transport` it
//! was constructed with, and carries no mutable state between calls. Each
//! operation is split into a `build_*` method that produces a
//! `SignedRequest` without touching the network, and a dispatching method
//! that sends it once and normalizes whatever comes back.
//!
//! The client never interprets status codes. A 422 from the service is a
//! `CheckersResponse` like any other; deciding it is a failure is the
//! caller's job.

use serde_json::Value;
use tracing::{debug, warn};

use crate::builder::{self, RequestParts};
use crate::config::ClientConfig;
use crate::error::CheckersError;
use crate::http::{HttpResponse, SignedRequest, CLIENT_KEY_HEADER, SIGNATURE_HEADER};
use crate::signer;
use crate::transport::Transport;
use crate::types::{CheckCreateRequest, CheckUpdateRequest, CheckersResponse, Operation};

/// Client for creating and updating check runs through a Checkers service.
///
/// Operations take `&self`, so one client can serve concurrent callers when
/// the transport is `Sync`.
#[derive(Debug, Clone)]
pub struct CheckersClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> CheckersClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_create_check_run(&self, input: &CheckCreateRequest) -> Result<SignedRequest, CheckersError> {
        builder::create_check_run(input).map(|parts| self.sign(parts))
    }

    pub fn build_update_check_run(&self, input: &CheckUpdateRequest) -> Result<SignedRequest, CheckersError> {
        builder::update_check_run(input).map(|parts| self.sign(parts))
    }

    /// Create a check run for `input.sha`.
    pub fn create_check_run(&self, input: &CheckCreateRequest) -> Result<CheckersResponse, CheckersError> {
        let request = self.build_create_check_run(input)?;
        self.dispatch(Operation::CreateCheckRun, &request)
    }

    /// Update the check run `input.check_run_id`.
    pub fn update_check_run(&self, input: &CheckUpdateRequest) -> Result<CheckersResponse, CheckersError> {
        let request = self.build_update_check_run(input)?;
        self.dispatch(Operation::UpdateCheckRun, &request)
    }

    /// Attach the URL and auth headers. The signature covers `parts.path`,
    /// which excludes the `/api` prefix the URL carries.
    fn sign(&self, parts: RequestParts) -> SignedRequest {
        let signature = signer::sign(&parts.path, &parts.body, self.config.client_secret());
        SignedRequest {
            method: parts.method,
            url: format!("{}/api{}", self.config.base_url(), parts.path),
            headers: vec![
                (CLIENT_KEY_HEADER.to_string(), self.config.client_key().to_string()),
                (SIGNATURE_HEADER.to_string(), signature),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            path: parts.path,
            body: parts.body,
        }
    }

    fn dispatch(&self, operation: Operation, request: &SignedRequest) -> Result<CheckersResponse, CheckersError> {
        debug!(%operation, method = %request.method, path = %request.path, "sending checkers request");

        let response = self.transport.send(request).map_err(|source| {
            warn!(%operation, path = %request.path, error = %source, "checkers request did not complete");
            CheckersError::Transport {
                operation,
                path: request.path.clone(),
                source,
            }
        })?;

        debug!(%operation, status = response.status, "received checkers response");
        Ok(normalize(response))
    }
}

/// Empty body becomes `Null`, JSON is parsed, anything else is kept as text.
fn normalize(response: HttpResponse) -> CheckersResponse {
    let body = if response.body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&response.body).unwrap_or(Value::String(response.body))
    };
    CheckersResponse {
        status_code: response.status,
        body,
    }
}
