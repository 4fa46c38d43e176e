//! Path and body construction for each logical operation.
//!
//! # Design
//! Every identifying field is percent-encoded on its own with the
//! `encodeURIComponent` character set, so a `/` or `?` inside an owner or
//! check name stays inside its segment. The serialized body is produced once
//! here and reused verbatim for both the signature and the wire. Bodies are
//! compact JSON; number literals keep the text they were parsed from.

use std::borrow::Cow;
use std::str::Utf8Error;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CheckersError;
use crate::http::HttpMethod;
use crate::types::{CheckCreateRequest, CheckUpdateRequest, Operation};

/// Bytes left alone by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Method, unsigned path (below `/api`) and serialized body of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    pub method: HttpMethod,
    pub path: String,
    pub body: String,
}

/// `POST /check/{check_name}/{owner}/{repo}/{sha}`
pub fn create_check_run(input: &CheckCreateRequest) -> Result<RequestParts, CheckersError> {
    let op = Operation::CreateCheckRun;
    let path = format!(
        "/check/{}/{}/{}/{}",
        segment(op, "check_name", &input.check_name)?,
        segment(op, "owner", &input.owner)?,
        segment(op, "repo", &input.repo)?,
        segment(op, "sha", &input.sha)?,
    );
    let body = input.payload.to_string();
    Ok(RequestParts {
        method: HttpMethod::Post,
        path,
        body,
    })
}

/// `PATCH /check/{owner}/{repo}/{check_run_id}`
pub fn update_check_run(input: &CheckUpdateRequest) -> Result<RequestParts, CheckersError> {
    let op = Operation::UpdateCheckRun;
    let path = format!(
        "/check/{}/{}/{}",
        segment(op, "owner", &input.owner)?,
        segment(op, "repo", &input.repo)?,
        segment(op, "check_run_id", &input.check_run_id.to_string())?,
    );
    let body = input.payload.to_string();
    Ok(RequestParts {
        method: HttpMethod::Patch,
        path,
        body,
    })
}

/// Percent-encode one path segment the way `encodeURIComponent` does.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Reverse `encode_segment`. Fails when the decoded bytes are not UTF-8.
pub fn decode_segment(value: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(value).decode_utf8()
}

fn segment(operation: Operation, field: &'static str, value: &str) -> Result<String, CheckersError> {
    if value.is_empty() {
        return Err(CheckersError::InvalidArgument { operation, field });
    }
    Ok(encode_segment(value))
}
