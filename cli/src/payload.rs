//! Check run payload read from stdin.

use std::io::Read;

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Read the whole of `reader` and parse it as JSON.
pub fn read_payload(mut reader: impl Read) -> Result<Value> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read payload from stdin")?;
    if raw.trim().is_empty() {
        bail!("No payload on stdin. Pipe the check run JSON into this command.");
    }
    serde_json::from_str(&raw).context("Payload on stdin is not valid JSON")
}
