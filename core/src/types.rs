//! Domain types for the Checkers API.
//!
//! # Design
//! Payloads stay as `serde_json::Value`: the service forwards them to the
//! source-hosting API untouched, so the client has no business knowing the
//! check-run schema.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Logical operation a request belongs to. Carried by errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateCheckRun,
    UpdateCheckRun,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::CreateCheckRun => "create_check_run",
            Operation::UpdateCheckRun => "update_check_run",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for creating a check run on `owner/repo` at `sha`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCreateRequest {
    pub owner: String,
    pub repo: String,
    pub sha: String,
    pub check_name: String,
    pub payload: Value,
}

/// Parameters for updating an existing check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUpdateRequest {
    pub owner: String,
    pub repo: String,
    pub check_run_id: CheckRunId,
    pub payload: Value,
}

/// Identifier of an existing check run. The upstream API hands out integers,
/// but callers holding the id as text can pass it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckRunId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CheckRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckRunId::Number(id) => write!(f, "{id}"),
            CheckRunId::Text(id) => f.write_str(id),
        }
    }
}

// Goes through `Value`: untagged enums cannot read numbers once
// `arbitrary_precision` is enabled.
impl<'de> Deserialize<'de> for CheckRunId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .map(CheckRunId::Number)
                .ok_or_else(|| de::Error::custom(format!("check run id {n} is not a non-negative integer"))),
            Value::String(s) => Ok(CheckRunId::Text(s)),
            other => Err(de::Error::custom(format!(
                "check run id must be a number or a string, got {other}"
            ))),
        }
    }
}

impl From<u64> for CheckRunId {
    fn from(id: u64) -> Self {
        CheckRunId::Number(id)
    }
}

impl From<&str> for CheckRunId {
    fn from(id: &str) -> Self {
        CheckRunId::Text(id.to_string())
    }
}

impl From<String> for CheckRunId {
    fn from(id: String) -> Self {
        CheckRunId::Text(id)
    }
}

/// Status code and parsed body of a completed round-trip, whatever the status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckersResponse {
    pub status_code: u16,
    pub body: Value,
}

impl CheckersResponse {
    /// True for 200..=299. Provided for callers; the client never consults it.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }
}
